// The SafeSearch likelihood scale — a five-level ordinal with an UNKNOWN floor.
//
// Vision reports each content category as a named likelihood rather than a
// raw probability. The enum keeps the ordering explicit so the policy can
// compare levels directly; anything the oracle sends that isn't one of the
// six names is rejected at the parse boundary, never guessed at.

use std::fmt;

use crate::error::ModerationError;

/// Ordinal likelihood that an image matches a content category.
///
/// Ordering follows the wire convention: `Unknown(0)` through
/// `VeryLikely(5)`. Derived `Ord` gives the policy its `>=` comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Likelihood {
    Unknown = 0,
    VeryUnlikely = 1,
    Unlikely = 2,
    Possible = 3,
    Likely = 4,
    VeryLikely = 5,
}

impl Likelihood {
    /// The numeric level (0-5) of this likelihood.
    pub fn as_level(self) -> u8 {
        self as u8
    }

    /// Build a likelihood from a numeric level, rejecting anything above 5.
    pub fn from_level(level: u8) -> Result<Self, ModerationError> {
        match level {
            0 => Ok(Likelihood::Unknown),
            1 => Ok(Likelihood::VeryUnlikely),
            2 => Ok(Likelihood::Unlikely),
            3 => Ok(Likelihood::Possible),
            4 => Ok(Likelihood::Likely),
            5 => Ok(Likelihood::VeryLikely),
            other => Err(ModerationError::InvalidScore {
                field: "level".to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Parse a wire-format likelihood name as Vision sends it
    /// (e.g. "VERY_UNLIKELY"). `field` names the category being parsed
    /// so rejection errors say which score was bad.
    pub fn from_wire(field: &str, name: &str) -> Result<Self, ModerationError> {
        match name {
            "UNKNOWN" => Ok(Likelihood::Unknown),
            "VERY_UNLIKELY" => Ok(Likelihood::VeryUnlikely),
            "UNLIKELY" => Ok(Likelihood::Unlikely),
            "POSSIBLE" => Ok(Likelihood::Possible),
            "LIKELY" => Ok(Likelihood::Likely),
            "VERY_LIKELY" => Ok(Likelihood::VeryLikely),
            other => Err(ModerationError::InvalidScore {
                field: field.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// The wire-format name of this likelihood.
    pub fn as_wire(self) -> &'static str {
        match self {
            Likelihood::Unknown => "UNKNOWN",
            Likelihood::VeryUnlikely => "VERY_UNLIKELY",
            Likelihood::Unlikely => "UNLIKELY",
            Likelihood::Possible => "POSSIBLE",
            Likelihood::Likely => "LIKELY",
            Likelihood::VeryLikely => "VERY_LIKELY",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
