// Google Vision SafeSearch implementation.
//
// One POST to `{base}/v1/images:annotate?key=...` per image, requesting a
// single SAFE_SEARCH_DETECTION feature for a URI-sourced image. The response
// carries named likelihoods per category plus an optional per-image error
// object; an error object wins over any annotation that came with it.
//
// API docs: https://cloud.google.com/vision/docs/detecting-safe-search

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::SafeSearchProvider;
use crate::credentials::VisionCredentials;
use crate::error::{ModerationError, Result};
use crate::moderation::likelihood::Likelihood;
use crate::moderation::policy::ScoreSet;

/// Default Vision API endpoint. Overridable for tests or regional endpoints.
pub const DEFAULT_VISION_API_URL: &str = "https://vision.googleapis.com";

/// Vision-backed score provider. Construct once at startup and share —
/// nothing here mutates per call.
pub struct VisionProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl VisionProvider {
    /// Create a provider pointing at the given endpoint with the given
    /// credentials and per-request timeout.
    pub fn new(base_url: &str, credentials: VisionCredentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("palisade/0.1 (image-moderation)")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: credentials.api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SafeSearchProvider for VisionProvider {
    async fn safe_search(&self, image_uri: &str) -> Result<ScoreSet> {
        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);

        let request = AnnotateBatchRequest {
            requests: vec![AnnotateRequest {
                image: ImageRef {
                    source: ImageSource {
                        image_uri: image_uri.to_string(),
                    },
                },
                features: vec![Feature {
                    feature_type: "SAFE_SEARCH_DETECTION".to_string(),
                }],
            }],
        };

        debug!(image_uri = image_uri, "SafeSearch annotate request");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModerationError::Api { status, body });
        }

        let batch: AnnotateBatchResponse = response.json().await?;

        let entry = batch.responses.into_iter().next().ok_or_else(|| {
            ModerationError::Annotation {
                message: "empty annotate response".to_string(),
            }
        })?;

        // The per-image error object takes precedence: if Vision reports one,
        // any annotation alongside it is untrustworthy.
        if let Some(error) = entry.error {
            return Err(ModerationError::Annotation {
                message: error.message,
            });
        }

        let annotation =
            entry
                .safe_search_annotation
                .ok_or_else(|| ModerationError::InvalidScore {
                    field: "safeSearchAnnotation".to_string(),
                    value: "missing".to_string(),
                })?;

        let scores = annotation.into_scores()?;

        debug!(
            adult = %scores.adult,
            violence = %scores.violence,
            racy = %scores.racy,
            "SafeSearch scores"
        );

        Ok(scores)
    }
}

// --- Vision API request/response types ---

#[derive(Serialize)]
struct AnnotateBatchRequest {
    requests: Vec<AnnotateRequest>,
}

#[derive(Serialize)]
struct AnnotateRequest {
    image: ImageRef,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageRef {
    source: ImageSource,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSource {
    image_uri: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
}

#[derive(Deserialize)]
struct AnnotateBatchResponse {
    #[serde(default)]
    responses: Vec<AnnotateResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResponse {
    safe_search_annotation: Option<SafeSearchAnnotation>,
    error: Option<ApiStatus>,
}

/// The raw annotation as Vision sends it: likelihood names as strings.
/// Kept loose here so the reject-on-unrecognized policy lives in one place
/// (`into_scores`), not in serde.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SafeSearchAnnotation {
    adult: Option<String>,
    violence: Option<String>,
    racy: Option<String>,
}

#[derive(Deserialize)]
struct ApiStatus {
    #[serde(default)]
    message: String,
}

impl SafeSearchAnnotation {
    /// Parse the wire annotation into a typed score set. Missing or
    /// unrecognized likelihood names are rejected, never defaulted.
    fn into_scores(self) -> Result<ScoreSet> {
        Ok(ScoreSet {
            adult: parse_category("adult", self.adult)?,
            violence: parse_category("violence", self.violence)?,
            racy: parse_category("racy", self.racy)?,
        })
    }
}

fn parse_category(field: &str, name: Option<String>) -> Result<Likelihood> {
    let name = name.ok_or_else(|| ModerationError::InvalidScore {
        field: field.to_string(),
        value: "missing".to_string(),
    })?;
    Likelihood::from_wire(field, &name)
}
