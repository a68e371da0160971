// Local key file credential source.
//
// Reads a JSON key file from disk. The read happens through tokio's fs so
// the provider trait stays uniformly async with the remote source.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{CredentialProvider, VisionCredentials};
use crate::error::{ModerationError, Result};

pub struct KeyFileCredentials {
    path: PathBuf,
}

impl KeyFileCredentials {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CredentialProvider for KeyFileCredentials {
    async fn vision_credentials(&self) -> Result<VisionCredentials> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ModerationError::Credentials {
                message: format!("cannot read key file {}: {e}", self.path.display()),
            })?;
        VisionCredentials::from_json(&raw)
    }
}
