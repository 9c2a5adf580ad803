//! Store-name mention-count checker.
//!
//! Each venue's proper name must appear within its own page text a target
//! number of times (default 8 to 10). Venue names routinely contain
//! parentheses, digits and punctuation, so matching is literal substring
//! search rather than an interpreted pattern.

/// Result of a mention-count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionStatus {
    /// Count is within [min, max].
    Ok(usize),
    /// Count is below the minimum.
    TooFew(usize),
    /// Count is above the maximum.
    TooMany(usize),
}

impl MentionStatus {
    /// The observed occurrence count regardless of verdict.
    pub fn count(&self) -> usize {
        match *self {
            MentionStatus::Ok(n) | MentionStatus::TooFew(n) | MentionStatus::TooMany(n) => n,
        }
    }
}

/// Counts non-overlapping occurrences of the exact venue name in `text`.
pub fn mention_count(text: &str, name: &str) -> usize {
    if name.is_empty() {
        return 0;
    }
    text.matches(name).count()
}

/// Checks the name count against the configured inclusive range.
pub fn check_mentions(text: &str, name: &str, min: usize, max: usize) -> MentionStatus {
    let count = mention_count(text, name);
    if count < min {
        MentionStatus::TooFew(count)
    } else if count > max {
        MentionStatus::TooMany(count)
    } else {
        MentionStatus::Ok(count)
    }
}
