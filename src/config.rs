use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::annotation::vision::DEFAULT_VISION_API_URL;

/// Where the Vision API key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Local JSON key file (default) — no cloud dependencies
    KeyFile,
    /// AWS Secrets Manager — requires GCP_SECRET_ARN and the
    /// `secrets-manager` build feature
    SecretsManager,
}

/// Central configuration loaded from environment variables.
///
/// All secrets stay outside this struct — config only says where to find
/// them. The .env file is loaded at startup via dotenvy.
pub struct Config {
    /// Which credential provisioning strategy to use (default: KeyFile)
    pub credential_source: CredentialSource,
    /// Path to the local JSON key file (key-file source)
    pub key_file_path: PathBuf,
    /// Secret ARN or name (secrets-manager source)
    pub secret_arn: Option<String>,
    /// Vision API endpoint (defaults to https://vision.googleapis.com).
    /// Override for tests or regional endpoints.
    pub vision_api_url: String,
    /// Per-request HTTP timeout for annotation calls
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default except the secret ARN, which only the secrets-manager
    /// source needs.
    pub fn load() -> Result<Self> {
        let credential_source = match env::var("PALISADE_CREDENTIAL_SOURCE").as_deref() {
            Ok("secrets-manager") => CredentialSource::SecretsManager,
            // "key-file" or unset both default to the local file
            _ => CredentialSource::KeyFile,
        };

        let request_timeout = env::var("PALISADE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            credential_source,
            key_file_path: env::var("GCP_KEY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("keys/gcp_service_account.json")),
            secret_arn: env::var("GCP_SECRET_ARN").ok(),
            vision_api_url: env::var("VISION_API_URL")
                .unwrap_or_else(|_| DEFAULT_VISION_API_URL.to_string()),
            request_timeout,
        })
    }

    /// Check that the selected credential source has what it needs.
    /// Call this before constructing the provider.
    pub fn require_credentials(&self) -> Result<()> {
        match self.credential_source {
            CredentialSource::KeyFile => {
                if !self.key_file_path.exists() {
                    anyhow::bail!(
                        "Key file not found: {}\n\
                         Set GCP_KEY_FILE in your .env file, or switch to\n\
                         PALISADE_CREDENTIAL_SOURCE=secrets-manager.",
                        self.key_file_path.display()
                    );
                }
                Ok(())
            }
            CredentialSource::SecretsManager => {
                if self.secret_arn.is_none() {
                    anyhow::bail!(
                        "GCP_SECRET_ARN not set. The secrets-manager source needs it.\n\
                         Add it to your .env file."
                    );
                }
                Ok(())
            }
        }
    }
}
