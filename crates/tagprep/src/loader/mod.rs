//! # Corpus Loading
//!
//! * [`CorpusPaths`] - the injected configuration record.
//! * [`CorpusEnvKeys`] - environment resolution of a [`CorpusPaths`].
//! * [`CorpusLoader`] - loads sources and memoizes the derived streams.

pub mod corpus_loader;
pub mod corpus_paths;

#[doc(inline)]
pub use corpus_loader::CorpusLoader;
#[doc(inline)]
pub use corpus_paths::{CorpusEnvKeys, CorpusPaths, CorpusSource, WSJ_ENV_KEYS};
