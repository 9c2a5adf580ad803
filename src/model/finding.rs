//! Validator findings.
//!
//! Content violations are the expected output of a successful run, not
//! errors. Each finding carries a kind, a severity, the set of implicated
//! page or record ids, and a human-readable detail string.

use serde::Serialize;

/// Whether a finding blocks the build or is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Build-blocking: the run exits non-zero.
    Error,
    /// Advisory only.
    Warning,
}

/// Which structured field a global-uniqueness finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GlobalField {
    Faq,
    Checklist,
    Title,
}

/// Classification of one content violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingKind {
    /// A word repeated past the per-page ceiling.
    RepeatedWord,
    /// An n-word phrase shared by two or more pages.
    PhraseDuplicate,
    /// An n-word phrase repeated within a single text.
    SelfPhraseDuplicate,
    /// FAQ questions on different pages sharing the same opening characters.
    FaqIntroDuplicate,
    /// Too many FAQ questions in one set opening the same way.
    FaqOpenerDiversity,
    /// Venue name mentioned too few or too many times on its own page.
    StoreNameOutOfRange,
    /// A denylisted word present in page text.
    BannedWord,
    /// A stylistic pattern typical of generated prose.
    AiPattern,
    /// A FAQ question, checklist item or section title shared across venues.
    GlobalDuplicate(GlobalField),
    /// A required record field is empty.
    EmptyField,
    /// Venue name present in card copy but not at the start.
    NamePosition,
    /// An expected page section is absent.
    MissingSection,
}

impl FindingKind {
    /// Default severity per check type. Banned words, cross-corpus
    /// duplicates and missing structure block the build; stylistic and
    /// range checks are advisory.
    pub fn default_severity(self) -> Severity {
        match self {
            FindingKind::BannedWord
            | FindingKind::PhraseDuplicate
            | FindingKind::GlobalDuplicate(_)
            | FindingKind::EmptyField
            | FindingKind::MissingSection => Severity::Error,
            FindingKind::RepeatedWord
            | FindingKind::SelfPhraseDuplicate
            | FindingKind::FaqIntroDuplicate
            | FindingKind::FaqOpenerDiversity
            | FindingKind::StoreNameOutOfRange
            | FindingKind::AiPattern
            | FindingKind::NamePosition => Severity::Warning,
        }
    }

    /// Short stable label, used for report grouping and ordering.
    pub fn label(self) -> &'static str {
        match self {
            FindingKind::RepeatedWord => "REPEATED_WORD",
            FindingKind::PhraseDuplicate => "PHRASE_DUPLICATE",
            FindingKind::SelfPhraseDuplicate => "SELF_PHRASE_DUPLICATE",
            FindingKind::FaqIntroDuplicate => "FAQ_INTRO_DUPLICATE",
            FindingKind::FaqOpenerDiversity => "FAQ_OPENER_DIVERSITY",
            FindingKind::StoreNameOutOfRange => "STORE_NAME_OUT_OF_RANGE",
            FindingKind::BannedWord => "BANNED_WORD",
            FindingKind::AiPattern => "AI_PATTERN",
            FindingKind::GlobalDuplicate(GlobalField::Faq) => "GLOBAL_DUPLICATE_FAQ",
            FindingKind::GlobalDuplicate(GlobalField::Checklist) => "GLOBAL_DUPLICATE_CHECKLIST",
            FindingKind::GlobalDuplicate(GlobalField::Title) => "GLOBAL_DUPLICATE_TITLE",
            FindingKind::EmptyField => "EMPTY_FIELD",
            FindingKind::NamePosition => "NAME_POSITION",
            FindingKind::MissingSection => "MISSING_SECTION",
        }
    }
}

/// One validator output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    /// Implicated page or record ids. One entry for single-page findings,
    /// several for cross-page findings.
    pub pages: Vec<String>,
    /// The offending token, phrase or count, human-readable.
    pub detail: String,
}

impl Finding {
    /// Creates a finding with the kind's default severity.
    pub fn new(kind: FindingKind, pages: Vec<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            pages,
            detail: detail.into(),
        }
    }

    /// Creates a single-page finding with the kind's default severity.
    pub fn on_page(kind: FindingKind, page: &str, detail: impl Into<String>) -> Self {
        Self::new(kind, vec![page.to_string()], detail)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True when the finding implicates more than one page.
    pub fn is_cross_page(&self) -> bool {
        self.pages.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severities() {
        assert_eq!(FindingKind::BannedWord.default_severity(), Severity::Error);
        assert_eq!(
            FindingKind::GlobalDuplicate(GlobalField::Faq).default_severity(),
            Severity::Error
        );
        assert_eq!(
            FindingKind::StoreNameOutOfRange.default_severity(),
            Severity::Warning
        );
        assert_eq!(FindingKind::AiPattern.default_severity(), Severity::Warning);
    }

    #[test]
    fn test_scope() {
        let single = Finding::on_page(FindingKind::BannedWord, "club/a", "\"해당\" x2");
        assert!(!single.is_cross_page());
        assert!(single.is_error());

        let cross = Finding::new(
            FindingKind::PhraseDuplicate,
            vec!["club/a".into(), "club/b".into()],
            "shared phrase",
        );
        assert!(cross.is_cross_page());
    }
}
