// Credential provisioning — strategy selected at startup, injected everywhere.
//
// The provider trait hides where the Vision API key comes from: a local JSON
// key file by default, or AWS Secrets Manager when built with the
// `secrets-manager` feature. The core never reads secrets itself; it is
// handed ready-made credentials once, at construction time.

pub mod key_file;
#[cfg(feature = "secrets-manager")]
pub mod secret_manager;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{Config, CredentialSource};
use crate::error::{ModerationError, Result};

/// Credentials needed to call the Vision API.
#[derive(Debug, Clone, Deserialize)]
pub struct VisionCredentials {
    pub api_key: String,
}

impl VisionCredentials {
    /// Parse credentials from the JSON document both sources share:
    /// `{"api_key": "..."}`. An empty key is as bad as a missing one.
    pub fn from_json(raw: &str) -> Result<Self> {
        let creds: VisionCredentials =
            serde_json::from_str(raw).map_err(|e| ModerationError::Credentials {
                message: format!("malformed credential document: {e}"),
            })?;
        if creds.api_key.is_empty() {
            return Err(ModerationError::Credentials {
                message: "credential document has an empty api_key".to_string(),
            });
        }
        Ok(creds)
    }
}

/// Trait for fetching Vision credentials from wherever they live.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn vision_credentials(&self) -> Result<VisionCredentials>;
}

/// Build the credential provider the configuration selects.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn CredentialProvider>> {
    match config.credential_source {
        CredentialSource::KeyFile => Ok(Box::new(key_file::KeyFileCredentials::new(
            config.key_file_path.clone(),
        ))),
        #[cfg(feature = "secrets-manager")]
        CredentialSource::SecretsManager => {
            let arn = config.secret_arn.clone().ok_or_else(|| {
                ModerationError::Credentials {
                    message: "GCP_SECRET_ARN not set for the secrets-manager source".to_string(),
                }
            })?;
            Ok(Box::new(secret_manager::SecretManagerCredentials::new(arn)))
        }
        #[cfg(not(feature = "secrets-manager"))]
        CredentialSource::SecretsManager => Err(ModerationError::Credentials {
            message: "this build lacks the secrets-manager feature; \
                      rebuild with --features secrets-manager or use the key-file source"
                .to_string(),
        }),
    }
}
