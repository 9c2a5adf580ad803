//! One rendered document under audit.

use crate::normalize;
use crate::token;
use serde::Serialize;
use std::collections::HashSet;

/// A rendered page with its derived text layers.
///
/// The text layers are computed once at construction and never mutated;
/// validation is read-only over them.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Stable identifier, e.g. `club/seoul/gangnam/octagon`.
    pub id: String,
    /// The raw document source. Kept for structure-level extraction (FAQ
    /// questions, h1 fallback); skipped in serialized reports.
    #[serde(skip)]
    pub raw: String,
    /// Full visible text of the document.
    pub visible_text: String,
    /// Visible text restricted to `<body>`.
    pub body_text: String,
    /// Body text with shared boilerplate regions removed.
    pub main_text: String,
}

impl Page {
    /// Builds a page by running the raw markup through the normalizer.
    pub fn from_markup(id: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            id: id.into(),
            visible_text: normalize::visible_text(&raw),
            body_text: normalize::body_text(&raw),
            main_text: normalize::main_text(&raw),
            raw,
        }
    }

    /// Word tokens of the body text (frequency pass).
    pub fn tokens(&self) -> Vec<&str> {
        token::tokenize(&self.body_text)
    }

    /// Hangul word runs of the main text (phrase pass).
    pub fn main_hangul_words(&self) -> Vec<&str> {
        token::hangul_words(&self.main_text)
    }

    /// Hangul bigram set of the visible text (similarity pass).
    pub fn bigrams(&self) -> HashSet<String> {
        token::hangul_bigrams(&self.visible_text)
    }

    /// FAQ question strings extracted from the raw markup.
    pub fn faq_questions(&self) -> Vec<String> {
        normalize::extract_faq_questions(&self.raw)
    }

    /// First `<h1>` heading, used as a venue-name fallback.
    pub fn h1(&self) -> Option<String> {
        normalize::extract_h1(&self.raw)
    }

    /// Category key: the first path segment of the id.
    pub fn category(&self) -> &str {
        self.id.split('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_layers() {
        let html = concat!(
            "<html><head><title>머리글</title></head><body>",
            "<header>공통 헤더</header>",
            "<main><p>고유 본문 내용</p></main>",
            "</body></html>"
        );
        let page = Page::from_markup("club/seoul/gangnam/octagon", html);

        assert!(page.visible_text.contains("머리글"));
        assert!(!page.body_text.contains("머리글"));
        assert!(page.body_text.contains("공통 헤더"));
        assert!(!page.main_text.contains("공통 헤더"));
        assert!(page.main_text.contains("고유 본문 내용"));
    }

    #[test]
    fn test_category_from_id() {
        let page = Page::from_markup("lounge/seoul/itaewon/volt", "<body></body>");
        assert_eq!(page.category(), "lounge");
    }
}
