// Unit tests for the decision policy.
//
// Exhaustive boundary and priority checks over the fixed threshold rule:
// every category sweeps the full 0-5 scale, the threshold is inclusive at
// LIKELY, and the adult > violence > racy priority picks a single reason.

use palisade::moderation::likelihood::Likelihood;
use palisade::moderation::policy::{classify, Reason, ScoreSet, Status, THRESHOLD};

fn scores(adult: u8, violence: u8, racy: u8) -> ScoreSet {
    ScoreSet {
        adult: Likelihood::from_level(adult).unwrap(),
        violence: Likelihood::from_level(violence).unwrap(),
        racy: Likelihood::from_level(racy).unwrap(),
    }
}

// ============================================================
// Threshold boundary — inclusive at LIKELY (level 4)
// ============================================================

#[test]
fn threshold_constant_is_likely() {
    assert_eq!(THRESHOLD, Likelihood::Likely);
}

#[test]
fn level_three_never_quarantines() {
    let d = classify(scores(3, 3, 3));
    assert_eq!(d.status, Status::Approved);
    assert_eq!(d.reason, Reason::Safe);
}

#[test]
fn level_four_quarantines() {
    assert_eq!(classify(scores(4, 0, 0)).status, Status::Quarantined);
    assert_eq!(classify(scores(0, 4, 0)).status, Status::Quarantined);
    assert_eq!(classify(scores(0, 0, 4)).status, Status::Quarantined);
}

#[test]
fn all_safe_combinations_below_threshold() {
    for adult in 0..=3u8 {
        for violence in 0..=3u8 {
            for racy in 0..=3u8 {
                let d = classify(scores(adult, violence, racy));
                assert_eq!(d.status, Status::Approved, "({adult},{violence},{racy})");
                assert_eq!(d.reason, Reason::Safe, "({adult},{violence},{racy})");
            }
        }
    }
}

// ============================================================
// Per-category reasons
// ============================================================

#[test]
fn adult_violation_regardless_of_other_values() {
    for violence in 0..=5u8 {
        for racy in 0..=5u8 {
            let d = classify(scores(4, violence, racy));
            assert_eq!(d.status, Status::Quarantined);
            assert_eq!(d.reason, Reason::Adult, "violence={violence} racy={racy}");
        }
    }
}

#[test]
fn violence_violation_when_adult_clear() {
    for adult in 0..=3u8 {
        for racy in 0..=5u8 {
            let d = classify(scores(adult, 5, racy));
            assert_eq!(d.status, Status::Quarantined);
            assert_eq!(d.reason, Reason::Violence, "adult={adult} racy={racy}");
        }
    }
}

#[test]
fn racy_violation_when_adult_and_violence_clear() {
    for adult in 0..=3u8 {
        for violence in 0..=3u8 {
            let d = classify(scores(adult, violence, 4));
            assert_eq!(d.status, Status::Quarantined);
            assert_eq!(d.reason, Reason::Racy, "adult={adult} violence={violence}");
        }
    }
}

// ============================================================
// Priority ordering — single reason, adult > violence > racy
// ============================================================

#[test]
fn all_three_maxed_reports_adult() {
    let d = classify(scores(5, 5, 5));
    assert_eq!(d.status, Status::Quarantined);
    assert_eq!(d.reason, Reason::Adult);
}

#[test]
fn violence_and_racy_both_violating_reports_violence() {
    let d = classify(scores(0, 4, 5));
    assert_eq!(d.reason, Reason::Violence);
}

// ============================================================
// Output vocabulary
// ============================================================

#[test]
fn status_strings_match_wire_vocabulary() {
    assert_eq!(Status::Approved.as_str(), "approved");
    assert_eq!(Status::Quarantined.as_str(), "quarantined");
}

#[test]
fn reason_strings_match_wire_vocabulary() {
    assert_eq!(Reason::Safe.as_str(), "safe");
    assert_eq!(Reason::Adult.as_str(), "adult");
    assert_eq!(Reason::Violence.as_str(), "violence");
    assert_eq!(Reason::Racy.as_str(), "racy");
}
