//! Text-analysis passes: word frequency, phrase duplication, and pairwise
//! bigram similarity.

pub mod frequency;
pub mod phrase;
pub mod similarity;

pub use frequency::repeated_words;
pub use phrase::{DuplicatePhrase, PhraseIndex};
pub use similarity::{all_pairs, jaccard, PageBigrams, PagePair, SimilarityReport};
