//! # Text Normalizer
//!
//! Turns raw page markup into plain text for the analysis passes.
//!
//! ## Extraction modes
//!
//! 1. **Visible text** - everything the reader sees: scripts, styles and
//!    comments removed with their content, tags stripped, entities decoded
//! 2. **Body text** - visible text restricted to `<body>`
//! 3. **Main text** - body text with shared boilerplate regions (header,
//!    footer, nav, trust block, related-items block, structured data)
//!    removed BEFORE tag stripping, so phrase-duplication checks never flag
//!    template text shared by every page
//!
//! All passes are best-effort lexical matching over self-generated markup.
//! Malformed or unclosed tags degrade to stray bracket characters in the
//! output; they never fail.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static RE_NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#(\d+);").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());

static RE_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());

// Boilerplate regions shared identically across pages. Removed before
// generic tag stripping because the match depends on intact tag structure.
static RE_BOILERPLATE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<header[^>]*>.*?</header>",
        r"(?is)<footer[^>]*>.*?</footer>",
        r"(?is)<nav[^>]*>.*?</nav>",
        r#"(?is)<div\s+class="trust-block".*?</div>"#,
        r#"(?is)<a\s+class="skip-link".*?</a>"#,
        r#"(?is)<div\s+class="reading-progress".*?</div>"#,
        r#"(?is)<div\s+class="detail-related".*?</div>"#,
        r#"(?is)<script\s+type="application/ld\+json".*?</script>"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// FAQ question containers used across the page templates.
static RE_FAQ_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<summary[^>]*>(.*?)</summary>").unwrap());

static RE_FAQ_Q: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<p\s+class="faq__q"[^>]*>(.*?)</p>"#).unwrap());

static RE_H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").unwrap());

/// Decodes the named entities the generator emits, plus numeric entities.
fn decode_entities(text: &str) -> String {
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");
    let text = RE_NUMERIC_ENTITY.replace_all(&text, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    // &amp; last, so "&amp;lt;" does not double-decode into "<".
    text.replace("&amp;", "&")
}

/// Strips markup from a fragment and normalizes the remaining text.
///
/// Script and style blocks are removed with their content so that embedded
/// code never leaks into word counts. Tags become a single space to avoid
/// concatenating words across tag boundaries.
fn strip_markup(fragment: &str) -> String {
    let text = RE_SCRIPT.replace_all(fragment, " ");
    let text = RE_STYLE.replace_all(&text, " ");
    let text = RE_COMMENT.replace_all(&text, " ");
    let text = RE_TAG.replace_all(&text, " ");
    let text = decode_entities(&text);
    let text: String = text.nfc().collect();
    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Extracts the full visible text of a page.
pub fn visible_text(raw_markup: &str) -> String {
    strip_markup(raw_markup)
}

/// Extracts the visible text of the `<body>` element.
///
/// Falls back to the whole document when no body tag is present.
pub fn body_text(raw_markup: &str) -> String {
    match RE_BODY.captures(raw_markup) {
        Some(caps) => strip_markup(&caps[1]),
        None => strip_markup(raw_markup),
    }
}

/// Extracts the primary content text with shared boilerplate removed.
pub fn main_text(raw_markup: &str) -> String {
    let body = match RE_BODY.captures(raw_markup) {
        Some(caps) => caps[1].to_string(),
        None => raw_markup.to_string(),
    };
    let mut body = body;
    for re in RE_BOILERPLATE.iter() {
        body = re.replace_all(&body, " ").into_owned();
    }
    strip_markup(&body)
}

/// Extracts the first `<h1>` heading text, if any.
///
/// Used as a fallback venue name when a page cannot be matched to a record.
pub fn extract_h1(raw_markup: &str) -> Option<String> {
    RE_H1.captures(raw_markup).map(|caps| {
        let inner = RE_TAG.replace_all(&caps[1], " ");
        RE_WHITESPACE.replace_all(&inner, " ").trim().to_string()
    })
}

/// Extracts FAQ question strings from page markup.
///
/// Questions live in `<summary>` elements, `p.faq__q` paragraphs, or `<h3>`
/// headings containing a question mark. Duplicates are removed while
/// preserving first-seen order.
pub fn extract_faq_questions(raw_markup: &str) -> Vec<String> {
    let mut questions = Vec::new();

    for caps in RE_FAQ_SUMMARY.captures_iter(raw_markup) {
        let clean = strip_markup(&caps[1]);
        if !clean.is_empty() {
            questions.push(clean);
        }
    }
    for caps in RE_FAQ_Q.captures_iter(raw_markup) {
        let clean = strip_markup(&caps[1]);
        if !clean.is_empty() {
            questions.push(clean);
        }
    }
    for caps in RE_H3.captures_iter(raw_markup) {
        let clean = strip_markup(&caps[1]);
        if clean.contains('?') || clean.contains('？') {
            questions.push(clean);
        }
    }

    let mut seen = std::collections::HashSet::new();
    questions.retain(|q| seen.insert(q.clone()));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_content_removed() {
        let html = "<p>본문 텍스트</p><script>var hidden = '스크립트내용';</script>";
        let text = visible_text(html);
        assert!(text.contains("본문 텍스트"));
        assert!(!text.contains("스크립트내용"));
    }

    #[test]
    fn test_style_content_removed() {
        let html = "<style>.club { color: red; }</style><p>강남 클럽</p>";
        let text = visible_text(html);
        assert_eq!(text, "강남 클럽");
    }

    #[test]
    fn test_comment_removed() {
        let html = "<p>첫 문장</p><!-- 주석 내용 --><p>둘째 문장</p>";
        let text = visible_text(html);
        assert!(!text.contains("주석"));
        assert_eq!(text, "첫 문장 둘째 문장");
    }

    #[test]
    fn test_tags_become_spaces() {
        // Words must not concatenate across tag boundaries
        let html = "<span>강남</span><span>클럽</span>";
        assert_eq!(visible_text(html), "강남 클럽");
    }

    #[test]
    fn test_entity_decoding() {
        let html = "A &amp; B &lt;tag&gt; &quot;인용&quot; &#39;따옴표&#39;&nbsp;끝 &#44032;";
        let text = visible_text(html);
        assert!(text.contains("A & B"));
        assert!(text.contains("<tag>"));
        assert!(text.contains("\"인용\""));
        assert!(text.contains("'따옴표'"));
        assert!(text.contains("가")); // &#44032; is U+AC00
    }

    #[test]
    fn test_double_escaped_entity_not_double_decoded() {
        let text = visible_text("&amp;lt;");
        assert_eq!(text, "&lt;");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "  여러   개의\n\n공백   ";
        assert_eq!(visible_text(html), "여러 개의 공백");
    }

    #[test]
    fn test_malformed_markup_never_panics() {
        let html = "<div><p>닫히지 않은 태그 <span class=\"broken";
        let text = visible_text(html);
        assert!(text.contains("닫히지 않은 태그"));
    }

    #[test]
    fn test_body_text_restricted_to_body() {
        let html = "<head><title>제목부분</title></head><body><p>본문부분</p></body>";
        let text = body_text(html);
        assert_eq!(text, "본문부분");
    }

    #[test]
    fn test_main_text_strips_boilerplate() {
        let html = concat!(
            "<body>",
            "<header>공통 헤더 문구</header>",
            "<nav>메뉴 항목</nav>",
            "<main><p>고유한 본문 내용</p></main>",
            "<div class=\"trust-block\">신뢰 배지 문구</div>",
            "<footer>공통 푸터 문구</footer>",
            "</body>"
        );
        let text = main_text(html);
        assert_eq!(text, "고유한 본문 내용");
    }

    #[test]
    fn test_main_text_strips_json_ld() {
        let html = concat!(
            "<body><p>본문</p>",
            "<script type=\"application/ld+json\">{\"name\":\"구조화데이터\"}</script>",
            "</body>"
        );
        let text = main_text(html);
        assert_eq!(text, "본문");
    }

    #[test]
    fn test_extract_h1() {
        let html = "<body><h1>옥타곤 <em>강남</em></h1></body>";
        assert_eq!(extract_h1(html), Some("옥타곤 강남".to_string()));
        assert_eq!(extract_h1("<p>제목 없음</p>"), None);
    }

    #[test]
    fn test_faq_question_extraction() {
        let html = concat!(
            "<details><summary>입장 가능 나이는 어떻게 되나요?</summary><p>답변</p></details>",
            "<p class=\"faq__q\">주차는 가능한가요?</p>",
            "<h3>드레스코드가 있나요?</h3>",
            "<h3>일반 소제목</h3>"
        );
        let questions = extract_faq_questions(html);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.contains('?')));
    }

    #[test]
    fn test_faq_questions_deduplicated() {
        let html = concat!(
            "<summary>같은 질문인가요?</summary>",
            "<summary>같은 질문인가요?</summary>"
        );
        let questions = extract_faq_questions(html);
        assert_eq!(questions.len(), 1);
    }
}
