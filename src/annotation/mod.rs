// Score provider — trait-based abstraction over the annotation oracle.
//
// The SafeSearchProvider trait defines the interface. VisionProvider
// implements it against Google's Vision REST API; swapping oracles means
// adding an implementation, not touching the policy or the facade.

pub mod traits;
pub mod vision;
