//! Data model: pages under audit, venue records, and validator findings.

mod finding;
mod page;
mod venue;

pub use finding::{Finding, FindingKind, GlobalField, Severity};
pub use page::Page;
pub use venue::{FaqItem, VenueRecord};
