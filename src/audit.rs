//! Audit orchestration.
//!
//! Runs every validator over a loaded corpus and aggregates the findings
//! into one [`AuditReport`]. The flow is one-way: pages and records go
//! through the normalizer and tokenizer, feed the analysis passes, and the
//! findings land in the report. Nothing here mutates the corpus.

use crate::analysis::{frequency, phrase, PhraseIndex};
use crate::config::AuditConfig;
use crate::corpus::Corpus;
use crate::model::{Finding, FindingKind, GlobalField, Page};
use crate::report::AuditReport;
use crate::validators::{
    ai_pattern, banned, faq, mention, uniqueness::UniquenessIndex, MentionStatus,
};

/// Runs the full audit over a corpus.
pub fn run_audit(corpus: &Corpus, config: &AuditConfig) -> AuditReport {
    let mut findings = Vec::new();
    let mut phrases = PhraseIndex::new(config.phrase_window);
    let mut faq_intros = UniquenessIndex::new();

    for page in &corpus.pages {
        // Repeated words, skipping listing pages that repeat category terms
        // by design.
        if !config.is_listing_page(&page.id) {
            for (word, count) in frequency::repeated_words(
                &page.tokens(),
                &config.particles,
                config.repeat_threshold,
            ) {
                findings.push(Finding::on_page(
                    FindingKind::RepeatedWord,
                    &page.id,
                    format!("word=\"{word}\" count={count}"),
                ));
            }
        }

        // Banned words over body text.
        for (term, count) in banned::scan_banned(&page.body_text, &config.banned_words) {
            findings.push(Finding::on_page(
                FindingKind::BannedWord,
                &page.id,
                format!("banned=\"{term}\" count={count}"),
            ));
        }

        // AI writing patterns over body text.
        for pattern in ai_pattern::detect_ai_patterns(&page.body_text) {
            findings.push(Finding::on_page(FindingKind::AiPattern, &page.id, pattern));
        }

        // Phrase windows over main content only.
        phrases.collect(&page.id, &page.main_hangul_words());

        // FAQ collection and per-page checks.
        let questions = page.faq_questions();
        for question in &questions {
            faq_intros.collect_prefix(&page.id, question, config.faq_intro_prefix);
        }
        if let Some(dupes) = faq::check_opener_diversity(&questions, config.faq_opener_ceiling) {
            findings.push(Finding::on_page(
                FindingKind::FaqOpenerDiversity,
                &page.id,
                format!("{dupes} duplicate openers"),
            ));
        }

        // Detail-page checks: mention count and required FAQ section. A page
        // without a resolvable venue name skips the mention check rather
        // than failing the run.
        if corpus.is_detail_page(page) {
            if questions.is_empty() {
                findings.push(Finding::on_page(
                    FindingKind::MissingSection,
                    &page.id,
                    "FAQ section missing",
                ));
            }
            if let Some(name) = corpus.venue_name_for(page) {
                match mention::check_mentions(
                    &page.body_text,
                    &name,
                    config.mention_min,
                    config.mention_max,
                ) {
                    MentionStatus::Ok(_) => {}
                    MentionStatus::TooFew(count) => findings.push(Finding::on_page(
                        FindingKind::StoreNameOutOfRange,
                        &page.id,
                        format!("name=\"{name}\" count={count} (TOO FEW)"),
                    )),
                    MentionStatus::TooMany(count) => findings.push(Finding::on_page(
                        FindingKind::StoreNameOutOfRange,
                        &page.id,
                        format!("name=\"{name}\" count={count} (TOO MANY)"),
                    )),
                }
            }
        }
    }

    // Cross-page phrase duplicates.
    for dupe in phrases.cross_page_duplicates() {
        findings.push(Finding::new(
            FindingKind::PhraseDuplicate,
            dupe.pages,
            format!("phrase=\"{}\"", dupe.phrase),
        ));
    }

    // Cross-page FAQ intro duplicates.
    for dupe in faq_intros.duplicates() {
        findings.push(Finding::new(
            FindingKind::FaqIntroDuplicate,
            dupe.owners,
            format!("intro=\"{}...\"", dupe.text),
        ));
    }

    // Corpus-wide uniqueness over the venue records' structured fields.
    findings.extend(global_uniqueness_findings(corpus));

    AuditReport::new(corpus.pages.len(), findings)
}

/// Two-phase global-uniqueness pass over FAQ questions, checklist items and
/// section titles. Every owner is collected before any index is queried.
fn global_uniqueness_findings(corpus: &Corpus) -> Vec<Finding> {
    let mut faq_index = UniquenessIndex::new();
    let mut checklist_index = UniquenessIndex::new();
    let mut title_index = UniquenessIndex::new();

    for venue in &corpus.venues {
        for question in venue.faq_questions() {
            faq_index.collect(&venue.slug, question);
        }
        for item in &venue.checklist {
            checklist_index.collect(&venue.slug, item);
        }
        for title in &venue.section_titles {
            title_index.collect(&venue.slug, title);
        }
    }

    let mut findings = Vec::new();
    for (index, field) in [
        (faq_index, GlobalField::Faq),
        (checklist_index, GlobalField::Checklist),
        (title_index, GlobalField::Title),
    ] {
        for dupe in index.duplicates() {
            findings.push(Finding::new(
                FindingKind::GlobalDuplicate(field),
                dupe.owners,
                format!("\"{}\"", dupe.text),
            ));
        }
    }
    findings
}

/// Validates one generated document in isolation.
///
/// Applies the single-page checks plus the stricter same-field phrase
/// variant that the corpus-wide audit cannot use.
pub fn audit_page(page: &Page, config: &AuditConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (term, count) in banned::scan_banned(&page.body_text, &config.banned_words) {
        findings.push(Finding::on_page(
            FindingKind::BannedWord,
            &page.id,
            format!("banned=\"{term}\" count={count}"),
        ));
    }

    for (phrase_text, count) in
        phrase::self_duplicates(&page.main_hangul_words(), config.phrase_window)
    {
        findings.push(Finding::on_page(
            FindingKind::SelfPhraseDuplicate,
            &page.id,
            format!("phrase=\"{phrase_text}\" x{count}"),
        ));
    }

    let questions = page.faq_questions();
    if let Some(dupes) = faq::check_opener_diversity(&questions, config.faq_opener_ceiling) {
        findings.push(Finding::on_page(
            FindingKind::FaqOpenerDiversity,
            &page.id,
            format!("{dupes} duplicate openers"),
        ));
    }

    for pattern in ai_pattern::detect_ai_patterns(&page.body_text) {
        findings.push(Finding::on_page(FindingKind::AiPattern, &page.id, pattern));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VenueRecord;

    fn detail_page(id: &str, main: &str) -> Page {
        Page::from_markup(
            id,
            format!("<body><header>공통 헤더</header><main>{main}</main></body>"),
        )
    }

    fn venue(slug: &str, name: &str) -> VenueRecord {
        VenueRecord {
            slug: slug.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_shared_phrase_flagged_across_pages() {
        // Pages A and B share an 8-token run in main content; C does not.
        let shared = "가 나 다 라 마 바 사 아";
        let a = detail_page("club/seoul/g/a", &format!("<p>{shared} 그리고 조용한 마무리</p>"));
        let b = detail_page("club/seoul/g/b", &format!("<p>{shared} 하지만 다른 전개</p>"));
        let c = detail_page("club/seoul/g/c", "<p>전혀 무관한 내용으로 채워진 본문</p>");
        let corpus = Corpus::from_parts(vec![], vec![a, b, c]);

        let report = run_audit(&corpus, &AuditConfig::default());
        let dupes = report.findings_of_kind("PHRASE_DUPLICATE");
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].pages, vec!["club/seoul/g/a", "club/seoul/g/b"]);
        assert!(dupes[0].detail.contains(shared));
    }

    #[test]
    fn test_boilerplate_not_phrase_checked() {
        // The identical header on every page must not produce duplicates.
        let a = detail_page("club/seoul/g/a", "<p>고유한 내용 하나</p>");
        let b = detail_page("club/seoul/g/b", "<p>고유한 내용 둘</p>");
        let corpus = Corpus::from_parts(vec![], vec![a, b]);
        let report = run_audit(&corpus, &AuditConfig::default());
        assert!(report.findings_of_kind("PHRASE_DUPLICATE").is_empty());
    }

    #[test]
    fn test_banned_word_blocks_run() {
        let page = detail_page("club/seoul/g/a", "<p>해당 장소 안내</p>");
        let corpus = Corpus::from_parts(vec![], vec![page]);
        let report = run_audit(&corpus, &AuditConfig::default());
        assert!(!report.pass);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_listing_page_skips_repeated_words() {
        let many_words = "클럽 ".repeat(40);
        let listing = Page::from_markup("index", format!("<body>{many_words}</body>"));
        let corpus = Corpus::from_parts(vec![], vec![listing]);
        let report = run_audit(&corpus, &AuditConfig::default());
        assert!(report.findings_of_kind("REPEATED_WORD").is_empty());

        let detail = Page::from_markup(
            "club/seoul/g/a",
            format!("<body>{many_words}</body>"),
        );
        let corpus = Corpus::from_parts(vec![], vec![detail]);
        let report = run_audit(&corpus, &AuditConfig::default());
        assert_eq!(report.findings_of_kind("REPEATED_WORD").len(), 1);
    }

    #[test]
    fn test_detail_page_without_faq_flagged() {
        // A detail page with no FAQ section yields a finding, not a crash,
        // and the finding blocks the run.
        let page = detail_page("club/seoul/g/a", "<p>고유한 본문 내용</p>");
        let corpus = Corpus::from_parts(vec![], vec![page]);

        let report = run_audit(&corpus, &AuditConfig::default());
        let missing = report.findings_of_kind("MISSING_SECTION");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].pages, vec!["club/seoul/g/a"]);
        assert!(!report.pass);
    }

    #[test]
    fn test_faq_intro_duplicate_across_pages() {
        // Two pages whose FAQ questions share the first 15 characters are
        // flagged once, naming both page ids; the questions differ beyond
        // the prefix.
        let faq = |q: &str| format!("<details><summary>{q}</summary><p>답변</p></details>");
        let a = detail_page(
            "club/seoul/g/a",
            &faq("강남 클럽 입장 연령 제한은 어떻게 되나요?"),
        );
        let b = detail_page(
            "club/seoul/g/b",
            &faq("강남 클럽 입장 연령 제한은 몇 살부터인가요?"),
        );
        let corpus = Corpus::from_parts(vec![], vec![a, b]);

        let report = run_audit(&corpus, &AuditConfig::default());
        let dupes = report.findings_of_kind("FAQ_INTRO_DUPLICATE");
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].pages, vec!["club/seoul/g/a", "club/seoul/g/b"]);
        assert!(dupes[0].detail.contains("강남 클럽 입장 연령 제한은"));
    }

    #[test]
    fn test_global_faq_duplicate_across_records() {
        let mut a = venue("octagon", "옥타곤");
        a.faq_items = vec![crate::model::FaqItem {
            question: "주차는 가능한가요?".into(),
            answer: String::new(),
        }];
        let mut b = venue("mass", "매스");
        b.faq_items = a.faq_items.clone();
        let corpus = Corpus::from_parts(vec![a, b], vec![]);

        let report = run_audit(&corpus, &AuditConfig::default());
        let dupes = report.findings_of_kind("GLOBAL_DUPLICATE_FAQ");
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].pages, vec!["mass", "octagon"]);
    }

    #[test]
    fn test_within_record_faq_repeat_not_global() {
        let mut a = venue("octagon", "옥타곤");
        let item = crate::model::FaqItem {
            question: "주차는 가능한가요?".into(),
            answer: String::new(),
        };
        a.faq_items = vec![item.clone(), item];
        let corpus = Corpus::from_parts(vec![a], vec![]);
        let report = run_audit(&corpus, &AuditConfig::default());
        assert!(report.findings_of_kind("GLOBAL_DUPLICATE_FAQ").is_empty());
    }

    #[test]
    fn test_audit_page_self_duplicates() {
        let repeated = "가 나 다 라 마 바 사 아 ".repeat(2);
        let page = detail_page("club/seoul/g/a", &format!("<p>{repeated}</p>"));
        let findings = audit_page(&page, &AuditConfig::default());
        assert!(findings
            .iter()
            .any(|f| f.kind == FindingKind::SelfPhraseDuplicate));
    }

    #[test]
    fn test_idempotent_report() {
        let shared = "가 나 다 라 마 바 사 아";
        let build = || {
            let a = detail_page("club/seoul/g/a", &format!("<p>해당 {shared}</p>"));
            let b = detail_page("club/seoul/g/b", &format!("<p>{shared} 추가</p>"));
            Corpus::from_parts(vec![], vec![a, b])
        };
        let first = run_audit(&build(), &AuditConfig::default());
        let second = run_audit(&build(), &AuditConfig::default());
        assert_eq!(first.to_json(), second.to_json());
        assert_eq!(first.exit_code(), second.exit_code());
    }
}
