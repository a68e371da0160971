// The moderation decision rule.
//
// A single fixed threshold over three SafeSearch categories. Categories are
// checked in priority order (adult, violence, racy) and only the first
// violation is reported — single-reason output is deliberate, not a gap.

use serde::Serialize;

use super::likelihood::Likelihood;

/// Quarantine threshold: LIKELY or more severe trips the gate.
pub const THRESHOLD: Likelihood = Likelihood::Likely;

/// The three SafeSearch scores for one image, as returned by the provider.
/// Immutable once produced; the policy only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSet {
    pub adult: Likelihood,
    pub violence: Likelihood,
    pub racy: Likelihood,
}

/// Moderation outcome for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Approved,
    Quarantined,
}

/// Why an image got its status. `Safe` pairs only with `Approved`; the
/// category reasons pair only with `Quarantined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Safe,
    Adult,
    Violence,
    Racy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub status: Status,
    pub reason: Reason,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Approved => "approved",
            Status::Quarantined => "quarantined",
        }
    }
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Safe => "safe",
            Reason::Adult => "adult",
            Reason::Violence => "violence",
            Reason::Racy => "racy",
        }
    }
}

/// Classify a score set against the fixed threshold.
///
/// Total and pure: no I/O, no failure path. The first category at or above
/// `THRESHOLD` in priority order (adult > violence > racy) becomes the
/// quarantine reason; if none reach it, the image is approved as safe.
pub fn classify(scores: ScoreSet) -> Decision {
    if scores.adult >= THRESHOLD {
        return Decision {
            status: Status::Quarantined,
            reason: Reason::Adult,
        };
    }
    if scores.violence >= THRESHOLD {
        return Decision {
            status: Status::Quarantined,
            reason: Reason::Violence,
        };
    }
    if scores.racy >= THRESHOLD {
        return Decision {
            status: Status::Quarantined,
            reason: Reason::Racy,
        };
    }

    Decision {
        status: Status::Approved,
        reason: Reason::Safe,
    }
}
