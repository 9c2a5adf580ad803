//! Corpus loading.
//!
//! A corpus is the full set of rendered pages plus the venue records backing
//! them, loaded fresh at process start and held in memory for one validation
//! pass. Loading is the only place infrastructure errors are fatal: a
//! missing record file or unparseable JSON aborts before any validator runs,
//! since downstream name matching and slug lookups would be unreliable.

use crate::error::{Error, Result};
use crate::model::{Page, VenueRecord};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// The full collection of pages and records for one audit run.
#[derive(Debug)]
pub struct Corpus {
    pub venues: Vec<VenueRecord>,
    /// Pages sorted by id.
    pub pages: Vec<Page>,
    /// Page id -> venue name, including detail-page overrides.
    name_by_page: HashMap<String, String>,
    /// Slug -> venue name fallback for pages whose path doesn't match.
    name_by_slug: HashMap<String, String>,
}

impl Corpus {
    /// Loads records and pages from disk.
    pub fn load(pages_dir: impl AsRef<Path>, venues_path: impl AsRef<Path>) -> Result<Self> {
        let venues = load_venues(venues_path)?;
        let pages = load_pages(pages_dir)?;
        Ok(Self::from_parts(venues, pages))
    }

    /// Assembles a corpus from already-loaded parts. Used by tests and by
    /// callers that render pages in memory.
    pub fn from_parts(venues: Vec<VenueRecord>, mut pages: Vec<Page>) -> Self {
        pages.sort_by(|a, b| a.id.cmp(&b.id));

        let mut name_by_page = HashMap::new();
        let mut name_by_slug = HashMap::new();
        for venue in &venues {
            if let Some(id) = venue.page_id() {
                name_by_page.insert(id, venue.name.clone());
            }
            if let Some(id) = venue.override_page_id() {
                name_by_page.insert(id, venue.name.clone());
            }
            name_by_slug.insert(venue.slug.clone(), venue.name.clone());
        }

        Self {
            venues,
            pages,
            name_by_page,
            name_by_slug,
        }
    }

    /// Resolves the venue name for a detail page: exact path match first,
    /// then the trailing slug segment, then the page's own `<h1>`.
    pub fn venue_name_for(&self, page: &Page) -> Option<String> {
        if let Some(name) = self.name_by_page.get(&page.id) {
            return Some(name.clone());
        }
        if let Some(slug) = page.id.rsplit('/').next() {
            if let Some(name) = self.name_by_slug.get(slug) {
                return Some(name.clone());
            }
        }
        page.h1()
    }

    /// True when the page is an auto-generated or overridden venue detail
    /// page subject to the mention-count rule.
    pub fn is_detail_page(&self, page: &Page) -> bool {
        self.name_by_page.contains_key(&page.id)
            || matches!(page.id.split('/').next(), Some("club" | "lounge" | "night"))
    }
}

/// Loads and validates the venue record file.
///
/// Fatal on a missing file, unparseable JSON, or a duplicate slug.
pub fn load_venues(path: impl AsRef<Path>) -> Result<Vec<VenueRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let data = fs::read_to_string(path)?;
    let venues: Vec<VenueRecord> = serde_json::from_str(&data)?;

    let mut seen = HashSet::new();
    for venue in &venues {
        if venue.slug.is_empty() {
            return Err(Error::InvalidData(format!(
                "venue \"{}\" has an empty slug",
                venue.name
            )));
        }
        if !seen.insert(venue.slug.as_str()) {
            return Err(Error::DuplicateSlug(venue.slug.clone()));
        }
    }
    Ok(venues)
}

/// Walks a build output directory and loads every `index.html` as a page.
///
/// Page ids are the directory path relative to the root, so
/// `dist/club/seoul/gangnam/octagon/index.html` becomes
/// `club/seoul/gangnam/octagon` and the root index becomes `index`.
pub fn load_pages(dir: impl AsRef<Path>) -> Result<Vec<Page>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_index_files(dir, &mut files)?;
    if files.is_empty() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }
    files.sort();

    let mut pages = Vec::with_capacity(files.len());
    for file in files {
        let raw = fs::read_to_string(&file)?;
        let id = page_id(dir, &file);
        pages.push(Page::from_markup(id, raw));
    }
    Ok(pages)
}

fn collect_index_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_index_files(&path, out)?;
        } else if path.file_name().is_some_and(|n| n == "index.html") {
            out.push(path);
        }
    }
    Ok(())
}

fn page_id(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let id = rel
        .parent()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();
    if id.is_empty() {
        "index".to_string()
    } else {
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_page(root: &Path, rel: &str, html: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), html).unwrap();
    }

    #[test]
    fn test_load_pages_and_ids() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("index.html"), "<body>홈</body>").unwrap();
        write_page(tmp.path(), "club/seoul/gangnam/octagon", "<body>옥타곤 소개</body>");
        write_page(tmp.path(), "lounge/seoul/itaewon/volt", "<body>볼트 소개</body>");

        let pages = load_pages(tmp.path()).unwrap();
        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["club/seoul/gangnam/octagon", "index", "lounge/seoul/itaewon/volt"]
        );
    }

    #[test]
    fn test_missing_dir_is_fatal() {
        let result = load_pages("/nonexistent/venuelint-test");
        assert!(matches!(result, Err(Error::EmptyCorpus(_))));
    }

    #[test]
    fn test_missing_venues_file_is_fatal() {
        let result = load_venues("/nonexistent/venues.json");
        assert!(matches!(result, Err(Error::MissingFile(_))));
    }

    #[test]
    fn test_malformed_venues_json_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("venues.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_venues(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_duplicate_slug_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("venues.json");
        fs::write(
            &path,
            r#"[{"slug": "octagon", "name": "옥타곤"}, {"slug": "octagon", "name": "복제"}]"#,
        )
        .unwrap();
        assert!(matches!(load_venues(&path), Err(Error::DuplicateSlug(_))));
    }

    #[test]
    fn test_venue_name_resolution() {
        let venues = vec![
            VenueRecord {
                slug: "octagon".into(),
                name: "옥타곤".into(),
                cat_slug: "club".into(),
                region_slug: "seoul".into(),
                district_slug: "gangnam".into(),
                ..Default::default()
            },
            VenueRecord {
                slug: "shampoo".into(),
                name: "수유샴푸나이트".into(),
                detail_page: Some("/y/".into()),
                ..Default::default()
            },
        ];
        let pages = vec![
            Page::from_markup("club/seoul/gangnam/octagon", "<body>본문</body>"),
            Page::from_markup("y", "<body>본문</body>"),
            Page::from_markup("club/seoul/hongdae/unknown", "<body><h1>이름없는곳</h1></body>"),
        ];
        let corpus = Corpus::from_parts(venues, pages);

        let by_id = |id: &str| corpus.pages.iter().find(|p| p.id == id).unwrap();
        assert_eq!(
            corpus.venue_name_for(by_id("club/seoul/gangnam/octagon")),
            Some("옥타곤".to_string())
        );
        // Overridden detail page resolves through the override map.
        assert_eq!(
            corpus.venue_name_for(by_id("y")),
            Some("수유샴푸나이트".to_string())
        );
        // Unmatched page falls back to its h1.
        assert_eq!(
            corpus.venue_name_for(by_id("club/seoul/hongdae/unknown")),
            Some("이름없는곳".to_string())
        );
    }
}
