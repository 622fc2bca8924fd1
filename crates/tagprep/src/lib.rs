//! # `tagprep` Corpus Preprocessing
//!
//! Turns raw tokenized corpora into normalized symbol streams for a
//! part-of-speech tagger, and turns tweets into sentiment feature vectors.
//!
//! See:
//! * [`vocab`] to build a [`vocab::VocabularyIndex`] of known words.
//! * [`unknown`] for the out-of-vocabulary labelling cascade.
//! * [`normalize`] to normalize tagged corpora and plain word streams.
//! * [`loader`] to load and memoize the training and test data.
//! * [`sentiment`] to vectorize tweets into ``[bias, positive, negative]`` rows.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Normalizing A Corpus
//!
//! ```rust
//! use std::sync::Arc;
//! use tagprep::{
//!     normalize::{CorpusNormalizer, StreamNormalizer, TaggedPair},
//!     unknown::{EMPTY_TAG, EMPTY_WORD, UnknownLabel},
//!     vocab::VocabularyIndex,
//! };
//!
//! let vocab = Arc::new(VocabularyIndex::from_words(["the", "dog", "ran"]));
//! let normalizer = CorpusNormalizer::new(vocab);
//!
//! let processed = normalizer
//!     .normalize_lines(["the NOUN", "", "Barked VERB"])
//!     .unwrap();
//!
//! assert_eq!(
//!     processed,
//!     vec![
//!         TaggedPair::new("the", "NOUN"),
//!         TaggedPair::new(EMPTY_WORD, EMPTY_TAG),
//!         TaggedPair::new(UnknownLabel::Uppercase.as_str(), "VERB"),
//!     ]
//! );
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod loader;
pub mod normalize;
pub mod sentiment;
pub mod types;
pub mod unknown;
pub mod vocab;

#[doc(inline)]
pub use errors::{TPResult, TagprepError};
#[doc(inline)]
pub use loader::{CorpusLoader, CorpusPaths};
#[doc(inline)]
pub use normalize::{CorpusNormalizer, StreamNormalizer, TaggedPair, WordNormalizer};
#[doc(inline)]
pub use unknown::{UnknownClassifier, UnknownLabel};
#[doc(inline)]
pub use vocab::VocabularyIndex;
