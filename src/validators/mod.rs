//! Structured-field validators.
//!
//! Each validator is a pure function over (text, config); none of them keep
//! state across calls. The corpus-wide uniqueness check is the one
//! exception, and it makes its accumulator explicit via
//! [`uniqueness::UniquenessIndex`].

pub mod ai_pattern;
pub mod banned;
pub mod faq;
pub mod mention;
pub mod records;
pub mod uniqueness;

pub use ai_pattern::{detect_ai_patterns, split_sentences};
pub use banned::scan_banned;
pub use faq::{check_opener_diversity, opener_key};
pub use mention::{check_mentions, mention_count, MentionStatus};
pub use records::lint_records;
pub use uniqueness::UniquenessIndex;
