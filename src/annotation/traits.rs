// Score provider trait — the swap-ready abstraction over the annotation oracle.
//
// The facade and the CLI only see this trait. VisionProvider implements it
// against Google's Vision REST API; tests implement it with scripted fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::moderation::policy::ScoreSet;

/// Trait for fetching SafeSearch likelihood scores for an image reference.
/// Implementations must be async because real providers are HTTP calls.
///
/// One invocation means one outbound call: no retries, no caching. A shared
/// instance is safe to use from concurrent tasks — implementations hold no
/// per-call mutable state.
#[async_trait]
pub trait SafeSearchProvider: Send + Sync {
    /// Fetch the adult/violence/racy likelihoods for one image URI.
    async fn safe_search(&self, image_uri: &str) -> Result<ScoreSet>;
}
