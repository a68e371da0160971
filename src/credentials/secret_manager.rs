// AWS Secrets Manager credential source (feature: secrets-manager).
//
// Fetches the secret string by ARN and parses the same JSON document the
// key file carries. Region and AWS credentials come from the ambient AWS
// environment (env vars, profile, instance role) via aws-config.

use async_trait::async_trait;

use super::{CredentialProvider, VisionCredentials};
use crate::error::{ModerationError, Result};

pub struct SecretManagerCredentials {
    secret_arn: String,
}

impl SecretManagerCredentials {
    pub fn new(secret_arn: String) -> Self {
        Self { secret_arn }
    }
}

#[async_trait]
impl CredentialProvider for SecretManagerCredentials {
    async fn vision_credentials(&self) -> Result<VisionCredentials> {
        let aws_config = aws_config::load_from_env().await;
        let client = aws_sdk_secretsmanager::Client::new(&aws_config);

        let secret = client
            .get_secret_value()
            .secret_id(&self.secret_arn)
            .send()
            .await
            .map_err(|e| ModerationError::Credentials {
                message: format!("cannot fetch secret {}: {e}", self.secret_arn),
            })?;

        let raw = secret
            .secret_string()
            .ok_or_else(|| ModerationError::Credentials {
                message: format!("secret {} has no string payload", self.secret_arn),
            })?;

        VisionCredentials::from_json(raw)
    }
}
