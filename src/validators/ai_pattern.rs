//! AI-writing-pattern heuristics.
//!
//! Generated prose falls into recognizable habits: sentences opening with
//! the same discourse markers (또한, 특히, 다양한), the "뿐만 아니라"
//! connective, and long runs of sentences all ending in the formal ~습니다 /
//! ~입니다 register. Each heuristic is an independent counter over the
//! sentence sequence; thresholds are applied by [`detect_ai_patterns`].
//!
//! Sentence boundaries are an approximation: the splitter breaks after
//! terminal punctuation and after Hangul sentence-final syllables followed
//! by whitespace. Edge punctuation may under- or over-split; the heuristics
//! only need coarse counts.

use regex::Regex;
use std::sync::LazyLock;

static RE_CONNECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"뿐만\s*아니라").unwrap());

static RE_FORMAL_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(습니다|입니다)[.!?\s]*$").unwrap());

const SENTENCE_FINAL_SYLLABLES: [char; 4] = ['다', '요', '죠', '까'];

fn is_terminal_punct(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。')
}

/// Splits text into sentences.
///
/// A boundary falls after terminal punctuation, or after one of the Hangul
/// sentence-final syllables when the next character is whitespace. Fragments
/// of 3 characters or fewer are discarded as noise.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let next_ws = chars
            .peek()
            .map(|&(_, next)| next.is_whitespace())
            .unwrap_or(false);
        let boundary = (is_terminal_punct(c) && next_ws)
            || (SENTENCE_FINAL_SYLLABLES.contains(&c) && next_ws);
        if boundary {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if sentence.chars().count() > 3 {
                sentences.push(sentence);
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if tail.chars().count() > 3 {
        sentences.push(tail);
    }
    sentences
}

/// Counts sentences whose first characters are `marker`.
pub fn count_sentence_starts(sentences: &[&str], marker: &str) -> usize {
    sentences
        .iter()
        .filter(|s| s.trim_start().starts_with(marker))
        .count()
}

/// True when the "뿐만 아니라" connective occurs anywhere in the text.
pub fn has_connective(text: &str) -> bool {
    RE_CONNECTIVE.is_match(text)
}

/// Longest run of consecutive sentences ending in ~습니다 or ~입니다.
pub fn max_consecutive_formal_endings(sentences: &[&str]) -> usize {
    let mut run = 0;
    let mut max_run = 0;
    for sentence in sentences {
        if RE_FORMAL_ENDING.is_match(sentence.trim()) {
            run += 1;
            max_run = max_run.max(run);
        } else {
            run = 0;
        }
    }
    max_run
}

const START_MARKERS: [&str; 3] = ["또한", "특히", "다양한"];

/// Runs every heuristic over one page text and returns the triggered
/// pattern descriptions.
pub fn detect_ai_patterns(text: &str) -> Vec<String> {
    let sentences = split_sentences(text);
    let mut patterns = Vec::new();

    for marker in START_MARKERS {
        let count = count_sentence_starts(&sentences, marker);
        if count > 1 {
            patterns.push(format!("\"{marker}\" sentence starts: {count}"));
        }
    }

    if has_connective(text) {
        patterns.push("\"뿐만 아니라\" pattern detected".to_string());
    }

    let consecutive = max_consecutive_formal_endings(&sentences);
    if consecutive >= 3 {
        patterns.push(format!("{consecutive} consecutive ~습니다/~입니다 sentences"));
    }

    patterns
}
