//! # venuelint
//!
//! A content-quality validation engine for Korean venue directory sites.
//! It audits a statically rendered page tree and the venue records behind
//! it for duplicated copy, filler vocabulary, and templated writing
//! patterns before a build ships.
//!
//! ## Checks
//!
//! - **Repetition**: per-page word frequency against a particle stop list
//! - **Phrase duplication**: 8-word Hangul windows shared across pages
//! - **Similarity**: pairwise Jaccard over character bigrams, with
//!   distribution histograms and per-category-pair means
//! - **Structured fields**: banned words, venue-name mention range, FAQ
//!   opener diversity, corpus-wide field uniqueness, generated-prose
//!   heuristics, and card-copy lint
//!
//! ## Quick Start
//!
//! ```no_run
//! use venuelint::{audit_dir, AuditConfig};
//!
//! fn main() -> venuelint::Result<()> {
//!     let config = AuditConfig::default();
//!     let report = audit_dir("dist", "data/venues.json", &config)?;
//!
//!     println!("{}", report.to_json());
//!     std::process::exit(report.exit_code());
//! }
//! ```

pub mod analysis;
pub mod audit;
pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod normalize;
pub mod report;
pub mod token;
pub mod validators;

// Re-exports
pub use analysis::{DuplicatePhrase, PageBigrams, PhraseIndex, SimilarityReport};
pub use audit::{audit_page, run_audit};
pub use config::AuditConfig;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use model::{Finding, FindingKind, Page, Severity, VenueRecord};
pub use report::AuditReport;
pub use validators::lint_records;

use std::path::Path;

/// Loads a corpus from disk and runs the full audit.
///
/// `pages_dir` is the build output root (every `index.html` below it becomes
/// a page) and `venues_path` is the venue record JSON file.
///
/// # Example
///
/// ```no_run
/// use venuelint::{audit_dir, AuditConfig};
///
/// let report = audit_dir("dist", "data/venues.json", &AuditConfig::default())?;
/// assert!(report.pages_audited > 0);
/// # Ok::<(), venuelint::Error>(())
/// ```
pub fn audit_dir(
    pages_dir: impl AsRef<Path>,
    venues_path: impl AsRef<Path>,
    config: &AuditConfig,
) -> Result<AuditReport> {
    let corpus = Corpus::load(pages_dir, venues_path)?;
    Ok(run_audit(&corpus, config))
}

/// Loads a corpus and builds the pairwise similarity report.
pub fn similarity_dir(pages_dir: impl AsRef<Path>) -> Result<SimilarityReport> {
    let pages = corpus::load_pages(pages_dir)?;
    let bigrams: Vec<PageBigrams> = pages
        .iter()
        .map(|page| PageBigrams::new(&page.id, page.bigrams()))
        .collect();
    Ok(SimilarityReport::build(&bigrams))
}
