// Moderation core: the likelihood scale, the threshold policy, and the
// facade that ties a score provider to the policy.

pub mod likelihood;
pub mod moderator;
pub mod policy;
