// Colored terminal output for moderation results.
//
// All terminal-specific formatting lives here; main.rs delegates. JSON
// output bypasses this module entirely.

use colored::Colorize;

use crate::error::ModerationError;
use crate::moderation::moderator::ModerationRecord;
use crate::moderation::policy::Status;

/// Display one moderation record as a table row.
pub fn display_record(record: &ModerationRecord) {
    let status = match record.status {
        Status::Approved => record.status.as_str().green().bold(),
        Status::Quarantined => record.status.as_str().red().bold(),
    };

    println!(
        "  {:<12} {:<9} adult={} violence={} racy={}  {}",
        status,
        record.reason.as_str(),
        record.adult,
        record.violence,
        record.racy,
        record.image_uri.dimmed(),
    );
}

/// Display a failed moderation attempt. The image stays undetermined —
/// no status or reason is shown, only the error.
pub fn display_failure(image_uri: &str, error: &ModerationError) {
    println!(
        "  {:<12} {}  {}",
        "error".yellow().bold(),
        error,
        image_uri.dimmed(),
    );
}

/// Display the batch summary line.
pub fn display_summary(approved: usize, quarantined: usize, failed: usize) {
    println!();
    if quarantined > 0 {
        println!("  {} {} quarantined", "!!".red().bold(), quarantined);
    }
    if failed > 0 {
        println!("  {} {} undetermined (errors)", "~".yellow(), failed);
    }
    println!("  {} {} approved", "ok".green(), approved);
}
