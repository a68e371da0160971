// Palisade: image moderation gate backed by Google Vision SafeSearch.
//
// This is the library root. Each module corresponds to a subsystem of the
// moderation flow: credentials feed the annotation provider, the provider
// feeds the policy, the facade ties them together.

pub mod annotation;
pub mod config;
pub mod credentials;
pub mod error;
pub mod moderation;
pub mod output;
