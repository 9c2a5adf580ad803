//! # Frequency Analyzer
//!
//! Flags discrete words repeated past a ceiling within one page. Grammatical
//! particles and single-character tokens are excluded; the latter are too
//! noisy given Korean particle attachment.
//!
//! Listing and category pages legitimately repeat category terms (클럽,
//! 라운지, ...) many times, so callers skip them via
//! [`crate::AuditConfig::listing_pages`]; the analyzer itself does not guess.

use std::collections::{HashMap, HashSet};

/// Counts word occurrences and returns words strictly above `max_count`.
///
/// Results are sorted by count descending, then word ascending, so repeated
/// runs over an unchanged corpus report in the same order.
pub fn repeated_words(
    tokens: &[&str],
    stop_list: &HashSet<String>,
    max_count: usize,
) -> Vec<(String, usize)> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if token.chars().count() < 2 {
            continue;
        }
        if stop_list.contains(*token) {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }

    let mut violations: Vec<(String, usize)> = freq
        .into_iter()
        .filter(|(_, count)| *count > max_count)
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    violations.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    violations
}
