//! # Phrase Duplication Detector
//!
//! Slides a fixed-size window (default 8 words) over each page's main
//! content and records which pages contain each exact phrase. Detection is
//! two-phase: collect every page into a [`PhraseIndex`], then query it for
//! duplicates. The accumulator is explicit; there is no ambient state.
//!
//! Phrase windows run over main content only. Shared boilerplate is already
//! removed by the normalizer, so a duplicate here is real copied prose, not
//! template text.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A phrase found on two or more distinct pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePhrase {
    pub phrase: String,
    /// Ids of every page containing the phrase, sorted.
    pub pages: Vec<String>,
}

/// Accumulator mapping each sliding-window phrase to the pages containing it.
///
/// BTree containers keep iteration deterministic so repeated runs over an
/// unchanged corpus produce identical reports.
#[derive(Debug, Default)]
pub struct PhraseIndex {
    window: usize,
    phrases: BTreeMap<String, BTreeSet<String>>,
}

impl PhraseIndex {
    /// Creates an index with the given window size in words.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            phrases: BTreeMap::new(),
        }
    }

    /// Phase 1: records every `window`-word phrase of one page.
    pub fn collect(&mut self, page_id: &str, words: &[&str]) {
        if self.window == 0 || words.len() < self.window {
            return;
        }
        for chunk in words.windows(self.window) {
            let phrase = chunk.join(" ");
            self.phrases
                .entry(phrase)
                .or_default()
                .insert(page_id.to_string());
        }
    }

    /// Phase 2: returns every phrase present on >= 2 distinct pages.
    ///
    /// Sorted by number of affected pages descending, then phrase ascending.
    pub fn cross_page_duplicates(&self) -> Vec<DuplicatePhrase> {
        let mut dupes: Vec<DuplicatePhrase> = self
            .phrases
            .iter()
            .filter(|(_, pages)| pages.len() >= 2)
            .map(|(phrase, pages)| DuplicatePhrase {
                phrase: phrase.clone(),
                pages: pages.iter().cloned().collect(),
            })
            .collect();
        dupes.sort_by(|a, b| {
            b.pages
                .len()
                .cmp(&a.pages.len())
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        dupes
    }

    /// Number of distinct phrases collected so far.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

/// Same-field variant: phrases occurring more than once within one text.
///
/// Used when validating a single generated document in isolation, where the
/// cross-page index cannot apply. Sorted by count descending, then phrase
/// ascending.
pub fn self_duplicates(words: &[&str], window: usize) -> Vec<(String, usize)> {
    if window == 0 || words.len() < window {
        return Vec::new();
    }
    let mut counts: HashMap<String, usize> = HashMap::new();
    for chunk in words.windows(window) {
        *counts.entry(chunk.join(" ")).or_insert(0) += 1;
    }
    let mut dupes: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    dupes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS_A: [&str; 10] = [
        "가", "나", "다", "라", "마", "바", "사", "아", "자", "차",
    ];

    #[test]
    fn test_cross_page_duplicate_detected() {
        let mut index = PhraseIndex::new(8);
        index.collect("club/a", &WORDS_A);
        index.collect("club/b", &WORDS_A[..8].to_vec());
        index.collect("lounge/c", &["전혀", "다른", "단어들로", "채워진", "본문", "내용", "입니다", "정말"]);

        let dupes = index.cross_page_duplicates();
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].phrase, "가 나 다 라 마 바 사 아");
        assert_eq!(dupes[0].pages, vec!["club/a", "club/b"]);
    }

    #[test]
    fn test_same_page_repeat_not_cross_page() {
        // The same phrase twice on ONE page must not count as cross-page.
        let mut repeated = WORDS_A[..8].to_vec();
        repeated.extend_from_slice(&WORDS_A[..8]);
        let mut index = PhraseIndex::new(8);
        index.collect("club/a", &repeated);
        assert!(index.cross_page_duplicates().is_empty());

        // But it does trigger the same-field variant.
        let self_dupes = self_duplicates(&repeated, 8);
        assert!(self_dupes
            .iter()
            .any(|(phrase, count)| phrase == "가 나 다 라 마 바 사 아" && *count == 2));
    }

    #[test]
    fn test_short_text_yields_nothing() {
        let mut index = PhraseIndex::new(8);
        index.collect("club/a", &WORDS_A[..7].to_vec());
        assert_eq!(index.phrase_count(), 0);
        assert!(self_duplicates(&WORDS_A[..7].to_vec(), 8).is_empty());
    }

    #[test]
    fn test_duplicates_sorted_by_page_count() {
        let mut index = PhraseIndex::new(2);
        // "가 나" on three pages, "다 라" on two.
        index.collect("p1", &["가", "나"]);
        index.collect("p2", &["가", "나"]);
        index.collect("p3", &["가", "나", "다", "라"]);
        index.collect("p4", &["다", "라"]);

        let dupes = index.cross_page_duplicates();
        assert_eq!(dupes.len(), 2); // "나 다" exists only on p3
        assert_eq!(dupes[0].phrase, "가 나");
        assert_eq!(dupes[0].pages.len(), 3);
        assert_eq!(dupes[1].phrase, "다 라");
    }
}
