//! # Similarity Engine
//!
//! Pairwise Jaccard similarity over per-page Hangul bigram sets. Every
//! unordered page pair is compared once, producing n*(n-1)/2 results, then
//! ranked, bucketed into decade histograms, and aggregated per category
//! pair.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// One page's bigram set prepared for comparison.
#[derive(Debug, Clone)]
pub struct PageBigrams {
    /// Page identifier, e.g. `club/seoul/gangnam/octagon`.
    pub id: String,
    /// Category key, by convention the first path segment of the id.
    pub category: String,
    pub bigrams: HashSet<String>,
}

impl PageBigrams {
    /// Creates an entry, deriving the category from the id's first segment.
    pub fn new(id: impl Into<String>, bigrams: HashSet<String>) -> Self {
        let id = id.into();
        let category = id.split('/').next().unwrap_or_default().to_string();
        Self {
            id,
            category,
            bigrams,
        }
    }
}

/// Similarity between one unordered page pair, as a percentage.
#[derive(Debug, Clone, Serialize)]
pub struct PagePair {
    pub a: String,
    pub b: String,
    pub similarity: f64,
}

/// Jaccard similarity of two sets in percent: `100 * |A∩B| / |A∪B|`.
///
/// Two empty sets are defined to have similarity 0, not NaN, so downstream
/// means and histograms stay total.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    (intersection as f64 / union as f64) * 100.0
}

/// Compares every unordered page pair exactly once.
///
/// The comparison is sharded across threads by the first index; each shard
/// only pairs `i` with `j > i`, so merging shards can neither double-count
/// nor omit a pair.
pub fn all_pairs(pages: &[PageBigrams]) -> Vec<PagePair> {
    (0..pages.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..pages.len()).map(move |j| PagePair {
                a: pages[i].id.clone(),
                b: pages[j].id.clone(),
                similarity: jaccard(&pages[i].bigrams, &pages[j].bigrams),
            })
        })
        .collect()
}

/// One decade bucket of the similarity histogram.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBucket {
    /// Inclusive lower bound in percent.
    pub lower: u32,
    /// Exclusive upper bound, except the top bucket which includes 100.
    pub upper: u32,
    pub count: usize,
}

/// Mean similarity for one unordered category pairing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPairMean {
    /// Category names sorted lexicographically and joined with " × ".
    pub key: String,
    pub mean: f64,
    pub pair_count: usize,
}

/// Ranked and aggregated view of one pairwise comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    /// All pairs, sorted by similarity descending then ids ascending.
    pub pairs: Vec<PagePair>,
    /// Unweighted mean across all pairs; 0 when there are no pairs.
    pub mean: f64,
    /// Decade buckets from [90,100] down to [0,10).
    pub histogram: Vec<HistogramBucket>,
    /// Count of pairs at or above each key threshold.
    pub cumulative: Vec<(u32, usize)>,
    /// Mean similarity per unordered category pairing, best first.
    pub category_means: Vec<CategoryPairMean>,
}

const CUMULATIVE_THRESHOLDS: [u32; 4] = [80, 60, 40, 20];

impl SimilarityReport {
    /// Builds the report from compared pages.
    pub fn build(pages: &[PageBigrams]) -> Self {
        let mut pairs = all_pairs(pages);
        pairs.sort_by(|x, y| {
            y.similarity
                .partial_cmp(&x.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| x.a.cmp(&y.a))
                .then_with(|| x.b.cmp(&y.b))
        });

        let mean = if pairs.is_empty() {
            0.0
        } else {
            pairs.iter().map(|p| p.similarity).sum::<f64>() / pairs.len() as f64
        };

        let histogram = (0..10)
            .rev()
            .map(|decade| {
                let lower = decade * 10;
                let upper = lower + 10;
                let count = pairs
                    .iter()
                    .filter(|p| {
                        p.similarity >= lower as f64
                            && (p.similarity < upper as f64
                                || (decade == 9 && p.similarity <= 100.0))
                    })
                    .count();
                HistogramBucket {
                    lower,
                    upper,
                    count,
                }
            })
            .collect();

        let cumulative = CUMULATIVE_THRESHOLDS
            .iter()
            .map(|&threshold| {
                let count = pairs
                    .iter()
                    .filter(|p| p.similarity >= threshold as f64)
                    .count();
                (threshold, count)
            })
            .collect();

        let category = |id: &str| -> String {
            pages
                .iter()
                .find(|page| page.id == id)
                .map(|page| page.category.clone())
                .unwrap_or_default()
        };
        let mut grouped: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for pair in &pairs {
            let mut cats = [category(&pair.a), category(&pair.b)];
            cats.sort();
            let key = format!("{} × {}", cats[0], cats[1]);
            let entry = grouped.entry(key).or_insert((0.0, 0));
            entry.0 += pair.similarity;
            entry.1 += 1;
        }
        let mut category_means: Vec<CategoryPairMean> = grouped
            .into_iter()
            .map(|(key, (sum, count))| CategoryPairMean {
                key,
                mean: sum / count as f64,
                pair_count: count,
            })
            .collect();
        category_means.sort_by(|x, y| {
            y.mean
                .partial_cmp(&x.mean)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| x.key.cmp(&y.key))
        });

        Self {
            pairs,
            mean,
            histogram,
            cumulative,
            category_means,
        }
    }
}
