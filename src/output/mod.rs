// Output formatting — terminal display for moderation results.

pub mod terminal;
