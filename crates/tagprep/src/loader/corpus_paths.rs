//! # Corpus Paths
//!
//! Static environment defaults for corpus path resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::errors::{TPResult, TagprepError};

/// Environment variable key for the training corpus.
pub const WALL_STREET_JOURNAL_POS: &str = "WALL_STREET_JOURNAL_POS";
/// Environment variable key for the vocabulary.
pub const WALL_STREET_JOURNAL_VOCABULARY: &str = "WALL_STREET_JOURNAL_VOCABULARY";
/// Environment variable key for the test corpus.
pub const WALL_STREET_JOURNAL_TEST_POS: &str = "WALL_STREET_JOURNAL_TEST_POS";
/// Environment variable key for the raw test words.
pub const WALL_STREET_JOURNAL_TEST_WORDS: &str = "WALL_STREET_JOURNAL_TEST_WORDS";

/// The four configured sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CorpusSource {
    /// Tagged training corpus.
    TrainingCorpus,

    /// Vocabulary word list.
    Vocabulary,

    /// Tagged test corpus.
    TestCorpus,

    /// Untagged test words.
    TestWords,
}

/// Configured source locations.
///
/// Every path is optional here; a [`crate::CorpusLoader`] fails with
/// [`TagprepError::Configuration`] when it first needs a missing one.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CorpusPaths {
    /// Tagged training corpus.
    pub training_corpus: Option<PathBuf>,

    /// Vocabulary word list.
    pub vocabulary: Option<PathBuf>,

    /// Tagged test corpus.
    pub test_corpus: Option<PathBuf>,

    /// Untagged test words.
    pub test_words: Option<PathBuf>,
}

impl CorpusPaths {
    /// Resolve all paths from the [`WSJ_ENV_KEYS`] environment variables.
    pub fn from_env() -> Self {
        WSJ_ENV_KEYS.resolve(Self::default())
    }

    /// Set the training corpus path.
    pub fn with_training_corpus<P: AsRef<Path>>(
        mut self,
        path: Option<P>,
    ) -> Self {
        self.training_corpus = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the vocabulary path.
    pub fn with_vocabulary<P: AsRef<Path>>(
        mut self,
        path: Option<P>,
    ) -> Self {
        self.vocabulary = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the test corpus path.
    pub fn with_test_corpus<P: AsRef<Path>>(
        mut self,
        path: Option<P>,
    ) -> Self {
        self.test_corpus = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the test words path.
    pub fn with_test_words<P: AsRef<Path>>(
        mut self,
        path: Option<P>,
    ) -> Self {
        self.test_words = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Get the configured path for `source`, if any.
    pub fn get(
        &self,
        source: CorpusSource,
    ) -> Option<&Path> {
        match source {
            CorpusSource::TrainingCorpus => self.training_corpus.as_deref(),
            CorpusSource::Vocabulary => self.vocabulary.as_deref(),
            CorpusSource::TestCorpus => self.test_corpus.as_deref(),
            CorpusSource::TestWords => self.test_words.as_deref(),
        }
    }

    /// Get the configured path for `source`.
    ///
    /// ## Errors
    /// [`TagprepError::Configuration`] naming the source, if it is absent.
    pub fn require(
        &self,
        source: CorpusSource,
    ) -> TPResult<&Path> {
        self.get(source).ok_or_else(|| TagprepError::Configuration {
            key: source.to_string(),
        })
    }
}

/// Static environment keys for resolving a [`CorpusPaths`].
#[derive(Debug, Clone, Copy)]
pub struct CorpusEnvKeys {
    /// Key for [`CorpusPaths::training_corpus`].
    pub training_corpus: &'static str,

    /// Key for [`CorpusPaths::vocabulary`].
    pub vocabulary: &'static str,

    /// Key for [`CorpusPaths::test_corpus`].
    pub test_corpus: &'static str,

    /// Key for [`CorpusPaths::test_words`].
    pub test_words: &'static str,
}

/// Default [`CorpusEnvKeys`]; the Wall Street Journal POS corpus.
pub const WSJ_ENV_KEYS: CorpusEnvKeys = CorpusEnvKeys {
    training_corpus: WALL_STREET_JOURNAL_POS,
    vocabulary: WALL_STREET_JOURNAL_VOCABULARY,
    test_corpus: WALL_STREET_JOURNAL_TEST_POS,
    test_words: WALL_STREET_JOURNAL_TEST_WORDS,
};

impl CorpusEnvKeys {
    /// The environment key for `source`.
    pub fn key(
        &self,
        source: CorpusSource,
    ) -> &'static str {
        match source {
            CorpusSource::TrainingCorpus => self.training_corpus,
            CorpusSource::Vocabulary => self.vocabulary,
            CorpusSource::TestCorpus => self.test_corpus,
            CorpusSource::TestWords => self.test_words,
        }
    }

    /// Resolve a [`CorpusPaths`].
    ///
    /// Resolution Order, per path:
    /// 1. the path in `overrides`, if present.
    /// 2. ``env[$KEY]``, if set.
    /// 3. `None`
    pub fn resolve(
        &self,
        overrides: CorpusPaths,
    ) -> CorpusPaths {
        let lookup = |current: Option<PathBuf>, key: &str| {
            current.or_else(|| env::var_os(key).map(PathBuf::from))
        };
        CorpusPaths {
            training_corpus: lookup(overrides.training_corpus, self.training_corpus),
            vocabulary: lookup(overrides.vocabulary, self.vocabulary),
            test_corpus: lookup(overrides.test_corpus, self.test_corpus),
            test_words: lookup(overrides.test_words, self.test_words),
        }
    }
}
