//! Corpus-wide uniqueness checker.
//!
//! The content model requires every venue's FAQ questions, checklist items
//! and section titles to be unique across the whole site, not merely
//! non-repeating within one page. Detection is two-phase: collect every
//! owner's texts into an explicit [`UniquenessIndex`], then query it once
//! all owners have been added. Querying a partially-built index would
//! silently miss duplicates, so the two phases are kept as separate calls.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn normalize_key(text: &str) -> String {
    RE_WS.replace_all(text.trim(), " ").to_string()
}

/// A text shared by two or more distinct owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalDuplicate {
    /// Whitespace-normalized text.
    pub text: String,
    /// Every owner id (slug or page id) carrying the text, sorted.
    pub owners: Vec<String>,
}

/// Accumulator mapping normalized text to the owners that carry it.
#[derive(Debug, Default)]
pub struct UniquenessIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl UniquenessIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase 1: records one owner's text.
    pub fn collect(&mut self, owner: &str, text: &str) {
        let key = normalize_key(text);
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_default().insert(owner.to_string());
    }

    /// Phase 1, truncated variant: records only the first `prefix_len`
    /// characters. Used for the FAQ-intro dedup, where questions sharing a
    /// 15-character opening are already considered templated.
    pub fn collect_prefix(&mut self, owner: &str, text: &str, prefix_len: usize) {
        let key: String = normalize_key(text).chars().take(prefix_len).collect();
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_default().insert(owner.to_string());
    }

    /// Phase 2: every text appearing under >= 2 distinct owners.
    ///
    /// Sorted by owner count descending, then text ascending.
    pub fn duplicates(&self) -> Vec<GlobalDuplicate> {
        let mut dupes: Vec<GlobalDuplicate> = self
            .entries
            .iter()
            .filter(|(_, owners)| owners.len() >= 2)
            .map(|(text, owners)| GlobalDuplicate {
                text: text.clone(),
                owners: owners.iter().cloned().collect(),
            })
            .collect();
        dupes.sort_by(|a, b| {
            b.owners
                .len()
                .cmp(&a.owners.len())
                .then_with(|| a.text.cmp(&b.text))
        });
        dupes
    }
}
