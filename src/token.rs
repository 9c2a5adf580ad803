//! # Tokenizer
//!
//! Segments normalized text at two granularities:
//!
//! - **Words**: runs of Hangul characters or Latin/digit characters, used by
//!   the frequency and phrase passes. Punctuation and symbols are separators,
//!   never tokens.
//! - **Character bigrams**: overlapping 2-character Hangul shingles, used
//!   only by the similarity engine. Bigram similarity rewards shared phrasing
//!   texture independent of word boundaries; word frequency rewards repeated
//!   discrete terms.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Hangul Syllables, Compatibility Jamo, Jamo, Jamo Extended-A/B.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{AC00}-\x{D7AF}\x{3130}-\x{318F}\x{1100}-\x{11FF}\x{A960}-\x{A97F}\x{D7B0}-\x{D7FF}]+|[a-zA-Z0-9]+",
    )
    .unwrap()
});

// Same block set as RE_TOKEN, so a Hangul word token is always visible to
// the phrase and bigram passes.
static RE_HANGUL_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{AC00}-\x{D7AF}\x{3130}-\x{318F}\x{1100}-\x{11FF}\x{A960}-\x{A97F}\x{D7B0}-\x{D7FF}]+",
    )
    .unwrap()
});

/// Returns true for characters in the Hangul blocks used by the tokenizer.
pub fn is_hangul(c: char) -> bool {
    let code = c as u32;
    (0xAC00..=0xD7AF).contains(&code) // Hangul Syllables
        || (0x1100..=0x11FF).contains(&code) // Hangul Jamo
        || (0x3130..=0x318F).contains(&code) // Hangul Compatibility Jamo
        || (0xA960..=0xA97F).contains(&code) // Hangul Jamo Extended-A
        || (0xD7B0..=0xD7FF).contains(&code) // Hangul Jamo Extended-B
}

/// Segments text into word tokens: Hangul runs and Latin/digit runs.
pub fn tokenize(text: &str) -> Vec<&str> {
    RE_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Segments text into Hangul-only word runs.
///
/// Phrase windows are built from these, so that numbers and markup residue
/// never participate in a phrase key.
pub fn hangul_words(text: &str) -> Vec<&str> {
    RE_HANGUL_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Builds the set of overlapping 2-character Hangul shingles.
///
/// Everything that is not Hangul, including spaces, is discarded first; the
/// bigrams therefore span word boundaries. Text with fewer than 2 Hangul
/// characters yields an empty set.
pub fn hangul_bigrams(text: &str) -> HashSet<String> {
    let hangul: Vec<char> = text.chars().filter(|&c| is_hangul(c)).collect();
    let mut bigrams = HashSet::new();
    for window in hangul.windows(2) {
        let mut shingle = String::with_capacity(6);
        shingle.push(window[0]);
        shingle.push(window[1]);
        bigrams.insert(shingle);
    }
    bigrams
}
