//! Audit configuration.
//!
//! All thresholds, denylists and page exclusions live here. The engine never
//! infers them; listing pages that legitimately repeat category terms, for
//! example, are an explicit configuration input.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Default denylist: filler nouns the copy style guide forbids.
const DEFAULT_BANNED: [&str; 6] = ["해당", "이곳", "공간", "매장", "감도", "기준"];

/// Korean grammatical particles excluded from the repeated-word check.
const DEFAULT_PARTICLES: [&str; 19] = [
    "은", "는", "이", "가", "을", "를", "의", "에", "에서", "도", "로", "으로", "와", "과",
    "하고", "나", "또는", "그리고", "하지만",
];

/// Listing and category index pages, excluded from the repeated-word check.
const DEFAULT_LISTING_PAGES: [&str; 4] = ["index", "clubs", "lounges", "nights"];

/// Thresholds and term lists for one audit run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Exact-substring denylist.
    pub banned_words: Vec<String>,
    /// Stop list for the word-frequency pass.
    pub particles: HashSet<String>,
    /// A word occurring strictly more than this per page is a violation.
    pub repeat_threshold: usize,
    /// Inclusive lower bound of the venue-name mention range.
    pub mention_min: usize,
    /// Inclusive upper bound of the venue-name mention range.
    pub mention_max: usize,
    /// Sliding-window size in words for the phrase-duplication pass.
    pub phrase_window: usize,
    /// Maximum tolerated duplicate FAQ opener keys per FAQ set.
    pub faq_opener_ceiling: usize,
    /// Leading characters compared by the cross-page FAQ-intro dedup.
    pub faq_intro_prefix: usize,
    /// Page ids skipped by the repeated-word check.
    pub listing_pages: HashSet<String>,
    /// Detailed findings printed per check before truncating to a total.
    pub detail_limit: usize,
    /// Per-field repetition ceiling for the card-copy lint.
    pub record_repeat_max: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            banned_words: DEFAULT_BANNED.iter().map(|s| s.to_string()).collect(),
            particles: DEFAULT_PARTICLES.iter().map(|s| s.to_string()).collect(),
            repeat_threshold: 15,
            mention_min: 8,
            mention_max: 10,
            phrase_window: 8,
            faq_opener_ceiling: 2,
            faq_intro_prefix: 15,
            listing_pages: DEFAULT_LISTING_PAGES.iter().map(|s| s.to_string()).collect(),
            detail_limit: 40,
            record_repeat_max: 3,
        }
    }
}

impl AuditConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tightened thresholds for pre-release audits.
    pub fn strict(mut self) -> Self {
        self.repeat_threshold = 10;
        self.faq_opener_ceiling = 1;
        self
    }

    /// Relaxed thresholds for work-in-progress content.
    pub fn lenient(mut self) -> Self {
        self.repeat_threshold = 20;
        self.faq_opener_ceiling = 3;
        self
    }

    /// Loads a config from a JSON file. Missing fields fall back to the
    /// defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// True when the page id is a listing page excluded from the
    /// repeated-word check.
    pub fn is_listing_page(&self, page_id: &str) -> bool {
        self.listing_pages.contains(page_id)
    }
}
