// Moderation facade: fetch scores, classify, flatten into one record.
//
// Provider errors propagate unchanged; the policy step cannot fail once the
// provider has produced a valid score set. A failed fetch therefore yields
// no record at all — callers treat that image as undetermined.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::info;

use super::policy::{classify, Reason, ScoreSet, Status};
use crate::annotation::traits::SafeSearchProvider;
use crate::error::Result;

/// The flattened result handed to callers: raw ordinal scores plus the
/// decision, in the lowercase wire vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationRecord {
    pub image_uri: String,
    pub adult: u8,
    pub violence: u8,
    pub racy: u8,
    pub status: Status,
    pub reason: Reason,
}

impl ModerationRecord {
    fn new(image_uri: &str, scores: ScoreSet) -> Self {
        let decision = classify(scores);
        Self {
            image_uri: image_uri.to_string(),
            adult: scores.adult.as_level(),
            violence: scores.violence.as_level(),
            racy: scores.racy.as_level(),
            status: decision.status,
            reason: decision.reason,
        }
    }
}

/// Composes a score provider with the decision policy. Holds the provider
/// behind `Arc` so one authenticated client is shared across concurrent
/// moderation calls.
pub struct Moderator {
    provider: Arc<dyn SafeSearchProvider>,
}

impl Moderator {
    pub fn new(provider: Arc<dyn SafeSearchProvider>) -> Self {
        Self { provider }
    }

    /// Moderate a single image reference.
    pub async fn moderate(&self, image_uri: &str) -> Result<ModerationRecord> {
        let scores = self.provider.safe_search(image_uri).await?;
        let record = ModerationRecord::new(image_uri, scores);

        info!(
            image_uri = image_uri,
            status = record.status.as_str(),
            reason = record.reason.as_str(),
            "Moderated image"
        );

        Ok(record)
    }

    /// Moderate a batch of independent image references with bounded
    /// concurrency, preserving input order. One image failing does not
    /// abort the rest — each URI gets its own result.
    pub async fn moderate_many(
        &self,
        image_uris: &[String],
        concurrency: usize,
    ) -> Vec<Result<ModerationRecord>> {
        stream::iter(image_uris)
            .map(|uri| async move { self.moderate(uri).await })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
