//! FAQ opener-diversity checker.
//!
//! Generated FAQ sets tend to open every question the same way. The opener
//! key is the first two characters of the question after leading enumeration
//! markers ("Q", digits, punctuation) are stripped; too many duplicate keys
//! within one FAQ set flag templated phrasing.

use std::collections::HashSet;

/// Derives the opener key of one question: first 2 characters after leading
/// enumeration markers.
pub fn opener_key(question: &str) -> String {
    question
        .trim_start_matches(|c: char| {
            c == 'Q'
                || c == 'q'
                || c.is_ascii_digit()
                || c == '.'
                || c == ':'
                || c == '?'
                || c == '？'
                || c.is_whitespace()
        })
        .chars()
        .take(2)
        .collect()
}

/// Counts questions whose opener key duplicates an earlier question's key.
pub fn duplicate_openers(questions: &[String]) -> usize {
    let mut seen = HashSet::new();
    let mut dupes = 0;
    for question in questions {
        if !seen.insert(opener_key(question)) {
            dupes += 1;
        }
    }
    dupes
}

/// Returns the duplicate count when it exceeds the ceiling.
pub fn check_opener_diversity(questions: &[String], ceiling: usize) -> Option<usize> {
    let dupes = duplicate_openers(questions);
    if dupes > ceiling {
        Some(dupes)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_opener_key_strips_enumeration() {
        assert_eq!(opener_key("Q1. 주차는 가능한가요?"), "주차");
        assert_eq!(opener_key("3: 입장 연령 제한이 있나요?"), "입장");
        assert_eq!(opener_key("드레스코드가 있나요?"), "드레");
    }

    #[test]
    fn test_diverse_openers_pass() {
        let questions = qs(&[
            "주차는 가능한가요?",
            "입장 연령 제한이 있나요?",
            "드레스코드가 있나요?",
            "테이블 예약은 어떻게 하나요?",
        ]);
        assert_eq!(duplicate_openers(&questions), 0);
        assert!(check_opener_diversity(&questions, 2).is_none());
    }

    #[test]
    fn test_duplicates_above_ceiling_flagged() {
        let questions = qs(&[
            "주차는 가능한가요?",
            "주차 요금은 얼마인가요?",
            "주차장이 넓은가요?",
            "주차 대행이 되나요?",
        ]);
        // Three questions repeat the "주차" opener after the first.
        assert_eq!(duplicate_openers(&questions), 3);
        assert_eq!(check_opener_diversity(&questions, 2), Some(3));
    }

    #[test]
    fn test_at_ceiling_passes() {
        let questions = qs(&[
            "주차는 가능한가요?",
            "주차 요금은 얼마인가요?",
            "주차장이 넓은가요?",
        ]);
        assert_eq!(duplicate_openers(&questions), 2);
        assert!(check_opener_diversity(&questions, 2).is_none());
    }
}
