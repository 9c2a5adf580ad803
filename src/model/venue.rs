//! Venue records backing the generated pages.

use serde::{Deserialize, Serialize};

/// One FAQ entry of a venue's long-form content.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaqItem {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a", default)]
    pub answer: String,
}

/// One directory entry from the venue record file.
///
/// Only the fields the validators use are modeled; unknown fields in the
/// record file are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VenueRecord {
    /// Unique key across all records.
    pub slug: String,
    /// Proper noun subject to the mention-count rules.
    pub name: String,
    #[serde(default)]
    pub cat_slug: String,
    #[serde(default)]
    pub region_slug: String,
    #[serde(default)]
    pub district_slug: String,
    /// External detail-page override. When set, the record is excluded from
    /// the auto-generated detail-page corpus but still participates in
    /// site-wide checks.
    #[serde(default)]
    pub detail_page: Option<String>,
    #[serde(default)]
    pub card_hook: String,
    #[serde(default)]
    pub card_value: String,
    #[serde(default)]
    pub card_tags: Vec<String>,
    #[serde(default)]
    pub faq_items: Vec<FaqItem>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub section_titles: Vec<String>,
}

impl VenueRecord {
    /// True when this record maps to an auto-generated detail page.
    pub fn generates_detail_page(&self) -> bool {
        self.detail_page.is_none()
    }

    /// Page id of the auto-generated detail page, when the record has the
    /// full category/region/district path.
    pub fn page_id(&self) -> Option<String> {
        if !self.generates_detail_page() {
            return None;
        }
        if self.cat_slug.is_empty()
            || self.region_slug.is_empty()
            || self.district_slug.is_empty()
            || self.slug.is_empty()
        {
            return None;
        }
        Some(format!(
            "{}/{}/{}/{}",
            self.cat_slug, self.region_slug, self.district_slug, self.slug
        ))
    }

    /// Page id of an external detail-page override, normalized to the same
    /// shape as auto-generated ids (no leading or trailing slash).
    pub fn override_page_id(&self) -> Option<String> {
        self.detail_page
            .as_ref()
            .map(|p| p.trim_matches('/').to_string())
            .filter(|p| !p.is_empty())
    }

    /// FAQ question texts, for uniqueness collection.
    pub fn faq_questions(&self) -> impl Iterator<Item = &str> {
        self.faq_items.iter().map(|f| f.question.as_str())
    }
}
