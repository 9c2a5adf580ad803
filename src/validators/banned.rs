//! Banned-word scanner.
//!
//! Matching is exact substring, not tokenized: the denylisted terms are
//! Korean words that also appear inside longer compounds, and those count
//! too. Any occurrence is a violation.

/// Counts occurrences of every denylisted term within `text`.
///
/// Returns `(term, count)` for each term with count >= 1, in denylist order.
pub fn scan_banned(text: &str, banned: &[String]) -> Vec<(String, usize)> {
    banned
        .iter()
        .filter_map(|term| {
            if term.is_empty() {
                return None;
            }
            let count = text.matches(term.as_str()).count();
            if count > 0 {
                Some((term.clone(), count))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denylist() -> Vec<String> {
        ["해당", "이곳", "공간"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_text_passes() {
        assert!(scan_banned("강남의 밤을 즐기는 방법", &denylist()).is_empty());
    }

    #[test]
    fn test_occurrences_counted() {
        let hits = scan_banned("해당 장소는 해당 조건에 맞습니다", &denylist());
        assert_eq!(hits, vec![("해당".to_string(), 2)]);
    }

    #[test]
    fn test_substring_inside_compound_counts() {
        // 공간 embedded in the longer compound 다목적공간 still matches.
        let hits = scan_banned("다목적공간으로 운영됩니다", &denylist());
        assert_eq!(hits, vec![("공간".to_string(), 1)]);
    }

    #[test]
    fn test_empty_term_ignored() {
        let banned = vec![String::new()];
        assert!(scan_banned("아무 텍스트", &banned).is_empty());
    }
}
