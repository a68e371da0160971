// Error taxonomy for the moderation core.
//
// Every failure in score retrieval terminates that moderation attempt and
// surfaces to the caller with the underlying message preserved. Nothing is
// retried or silently defaulted here — a caller that sees an error must
// treat the image as undetermined, never as approved or quarantined.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModerationError {
    /// The annotation oracle returned an explicit error object in its
    /// response body. The message is the oracle's, verbatim.
    #[error("Vision API error: {message}")]
    Annotation { message: String },

    /// The oracle answered with a non-success HTTP status.
    #[error("Vision API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Transport-level failure: connect, timeout, TLS, body decode.
    /// The underlying reqwest error propagates unmodified.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A likelihood from the oracle was missing, unrecognized, or out of
    /// the 0-5 ordinal range. Rejected at the parse boundary rather than
    /// clamped, so a malformed response never produces a decision.
    #[error("invalid likelihood for {field}: {value}")]
    InvalidScore { field: String, value: String },

    /// Credential provisioning failed: key file unreadable or malformed,
    /// secret fetch failed, or the resolved credentials carry no API key.
    #[error("credential error: {message}")]
    Credentials { message: String },
}

pub type Result<T> = std::result::Result<T, ModerationError>;
