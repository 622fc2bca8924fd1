//! # Corpus Loader

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    errors::TPResult,
    loader::{CorpusPaths, CorpusSource},
    normalize::{CorpusNormalizer, StreamNormalizer, TaggedPair, WordNormalizer},
    vocab::{
        VocabularyIndex,
        io::{load_lines, load_vocabulary_words},
    },
};

/// Loads the training and test data, memoizing everything derived from it.
///
/// Each accessor reads its source on first call and caches the result;
/// later calls return the cached value. Caches are [`OnceCell`]s, so
/// concurrent first access is serialized and each source is read at most
/// once per loader. A failed load caches nothing; the next call retries.
#[derive(Debug, Default)]
pub struct CorpusLoader {
    paths: CorpusPaths,

    vocabulary_words: OnceCell<Vec<String>>,
    vocabulary: OnceCell<Arc<VocabularyIndex>>,
    word_normalizer: OnceCell<WordNormalizer>,

    training_corpus: OnceCell<Vec<String>>,
    processed_training: OnceCell<Vec<TaggedPair>>,

    test_corpus: OnceCell<Vec<String>>,
    test_words: OnceCell<Vec<String>>,
}

impl CorpusLoader {
    /// Build a loader over the given sources.
    pub fn new(paths: CorpusPaths) -> Self {
        Self {
            paths,
            ..Default::default()
        }
    }

    /// Build a loader over sources resolved from the environment.
    ///
    /// See [`CorpusPaths::from_env`].
    pub fn from_env() -> Self {
        Self::new(CorpusPaths::from_env())
    }

    /// The configured sources.
    pub fn paths(&self) -> &CorpusPaths {
        &self.paths
    }

    fn load_source(
        &self,
        source: CorpusSource,
    ) -> TPResult<Vec<String>> {
        load_lines(self.paths.require(source)?)
    }

    /// The sorted vocabulary word list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn vocabulary_words(&self) -> TPResult<&[String]> {
        self.vocabulary_words
            .get_or_try_init(|| {
                log::debug!("loading vocabulary words");
                load_vocabulary_words(self.paths.require(CorpusSource::Vocabulary)?)
            })
            .map(Vec::as_slice)
    }

    /// The vocabulary index, built from [`Self::vocabulary_words`].
    pub fn vocabulary(&self) -> TPResult<&Arc<VocabularyIndex>> {
        self.vocabulary.get_or_try_init(|| {
            let words = self.vocabulary_words()?;
            log::debug!("indexing {} vocabulary words", words.len());
            Ok(Arc::new(VocabularyIndex::from_sorted_words(
                words.iter().cloned(),
            )))
        })
    }

    /// The word normalizer bound to [`Self::vocabulary`].
    pub fn word_normalizer(&self) -> TPResult<&WordNormalizer> {
        self.word_normalizer
            .get_or_try_init(|| Ok(WordNormalizer::new(self.vocabulary()?.clone())))
    }

    /// The raw training corpus lines.
    pub fn training_corpus(&self) -> TPResult<&[String]> {
        self.training_corpus
            .get_or_try_init(|| self.load_source(CorpusSource::TrainingCorpus))
            .map(Vec::as_slice)
    }

    /// The processed training corpus.
    ///
    /// One [`TaggedPair`] per raw line, in order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn processed_training(&self) -> TPResult<&[TaggedPair]> {
        self.processed_training
            .get_or_try_init(|| {
                let normalizer = CorpusNormalizer::new(self.vocabulary()?.clone());
                let corpus = self.training_corpus()?;
                log::debug!("normalizing {} training lines", corpus.len());
                normalize(normalizer, corpus)
            })
            .map(Vec::as_slice)
    }

    /// The raw test corpus lines.
    pub fn test_corpus(&self) -> TPResult<&[String]> {
        self.test_corpus
            .get_or_try_init(|| self.load_source(CorpusSource::TestCorpus))
            .map(Vec::as_slice)
    }

    /// The processed test words.
    ///
    /// One token per raw line, in order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn test_words(&self) -> TPResult<&[String]> {
        self.test_words
            .get_or_try_init(|| {
                let normalizer = self.word_normalizer()?.clone();
                let words = self.load_source(CorpusSource::TestWords)?;
                log::debug!("normalizing {} test words", words.len());
                normalize(normalizer, &words)
            })
            .map(Vec::as_slice)
    }
}

#[cfg(feature = "rayon")]
fn normalize<N: StreamNormalizer>(
    normalizer: N,
    lines: &[String],
) -> TPResult<Vec<N::Output>> {
    crate::rayon::ParallelRayonNormalizer::new(normalizer).normalize_batch(lines)
}

#[cfg(not(feature = "rayon"))]
fn normalize<N: StreamNormalizer>(
    normalizer: N,
    lines: &[String],
) -> TPResult<Vec<N::Output>> {
    normalizer.normalize_batch(lines)
}
