//! # Stream Normalization
//!
//! Normalizers map raw lines onto token streams, one output per input,
//! in input order. Out-of-vocabulary words are replaced through an
//! [`crate::unknown::UnknownClassifier`].
//!
//! * [`CorpusNormalizer`] - ``word tag`` corpus lines to [`TaggedPair`]s.
//! * [`WordNormalizer`] - untagged word lines to tokens.

pub mod corpus_normalizer;
pub mod tagged_pair;
pub mod word_normalizer;

#[doc(inline)]
pub use corpus_normalizer::CorpusNormalizer;
#[doc(inline)]
pub use tagged_pair::TaggedPair;
#[doc(inline)]
pub use word_normalizer::WordNormalizer;

use crate::errors::TPResult;

/// A line-at-a-time, order-preserving normalizer.
pub trait StreamNormalizer: Send + Sync {
    /// The normalized record type.
    type Output: Send;

    /// Normalize one line.
    ///
    /// ## Arguments
    /// * `index` - the line's position in its source; used in errors.
    /// * `line` - the raw line.
    fn normalize_line(
        &self,
        index: usize,
        line: &str,
    ) -> TPResult<Self::Output>;

    /// Normalize a sequence of lines.
    ///
    /// Output order and length equal the input's.
    fn normalize_lines<I>(
        &self,
        lines: I,
    ) -> TPResult<Vec<Self::Output>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| self.normalize_line(index, line.as_ref()))
            .collect()
    }

    /// Normalize a batch of lines.
    ///
    /// Wrappers may override this to parallelize; see
    /// ``rayon::ParallelRayonNormalizer``.
    fn normalize_batch(
        &self,
        batch: &[String],
    ) -> TPResult<Vec<Self::Output>> {
        self.normalize_lines(batch)
    }
}
