//! # Parallel Normalizer

use crate::{errors::TPResult, normalize::StreamNormalizer};

/// Batch-Level Parallel Normalizer Wrapper.
///
/// Enables ``rayon`` normalization of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonNormalizer<N: StreamNormalizer> {
    /// Inner normalizer.
    pub inner: N,
}

impl<N: StreamNormalizer> ParallelRayonNormalizer<N> {
    /// Create a new parallel normalizer.
    ///
    /// ## Arguments
    /// * `inner` - The normalizer to wrap.
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: StreamNormalizer> StreamNormalizer for ParallelRayonNormalizer<N> {
    type Output = N::Output;

    fn normalize_line(
        &self,
        index: usize,
        line: &str,
    ) -> TPResult<Self::Output> {
        self.inner.normalize_line(index, line)
    }

    fn normalize_batch(
        &self,
        batch: &[String],
    ) -> TPResult<Vec<Self::Output>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .enumerate()
            .map(|(index, line)| self.inner.normalize_line(index, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        errors::TagprepError,
        normalize::{CorpusNormalizer, WordNormalizer},
        types::{check_is_send, check_is_sync},
        vocab::VocabularyIndex,
    };

    fn vocab() -> Arc<VocabularyIndex> {
        Arc::new(VocabularyIndex::from_words(["the", "dog", "ran"]))
    }

    #[test]
    fn test_parallel_corpus_matches_serial() {
        let serial = CorpusNormalizer::new(vocab());
        let parallel = ParallelRayonNormalizer::new(serial.clone());
        check_is_send(&parallel);
        check_is_sync(&parallel);

        let batch: Vec<String> = (0..1000)
            .map(|i| match i % 4 {
                0 => "the DT".to_string(),
                1 => String::new(),
                2 => format!("word{i} CD"),
                _ => "Barked VBD".to_string(),
            })
            .collect();

        assert_eq!(
            parallel.normalize_batch(&batch).unwrap(),
            serial.normalize_batch(&batch).unwrap()
        );
    }

    #[test]
    fn test_parallel_words_matches_serial() {
        let serial = WordNormalizer::new(vocab());
        let parallel = ParallelRayonNormalizer::new(serial.clone());

        let batch: Vec<String> = ["the", "", "kindness", "Dog", "9"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            parallel.normalize_batch(&batch).unwrap(),
            serial.normalize_batch(&batch).unwrap()
        );
    }

    #[test]
    fn test_parallel_reports_malformed_line() {
        let parallel = ParallelRayonNormalizer::new(CorpusNormalizer::new(vocab()));
        let batch = vec!["the DT".to_string(), "x y z".to_string()];
        let err = parallel.normalize_batch(&batch).unwrap_err();
        assert!(matches!(
            err,
            TagprepError::MalformedLine { line: 1, fields: 3 }
        ));
    }
}
