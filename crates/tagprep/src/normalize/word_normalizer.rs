//! # Word Normalizer

use std::sync::Arc;

use crate::{
    errors::TPResult,
    normalize::StreamNormalizer,
    unknown::{EMPTY_WORD, UnknownClassifier},
    vocab::VocabularyIndex,
};

/// Normalizes untagged word lines.
///
/// Each word is trimmed; an empty result becomes [`EMPTY_WORD`],
/// anything else goes through the [`UnknownClassifier`].
#[derive(Debug, Clone)]
pub struct WordNormalizer {
    classifier: UnknownClassifier,
}

impl WordNormalizer {
    /// Bind a normalizer to a vocabulary.
    pub fn new(vocab: Arc<VocabularyIndex>) -> Self {
        Self::from_classifier(UnknownClassifier::new(vocab))
    }

    /// Build from an existing classifier.
    pub fn from_classifier(classifier: UnknownClassifier) -> Self {
        Self { classifier }
    }

    /// The classifier.
    pub fn classifier(&self) -> &UnknownClassifier {
        &self.classifier
    }

    /// Normalize a single word; never fails.
    pub fn normalize_word(
        &self,
        word: &str,
    ) -> String {
        let word = word.trim();
        if word.is_empty() {
            EMPTY_WORD.to_string()
        } else {
            self.classifier.classify_token(word)
        }
    }
}

impl StreamNormalizer for WordNormalizer {
    type Output = String;

    fn normalize_line(
        &self,
        _index: usize,
        line: &str,
    ) -> TPResult<String> {
        Ok(self.normalize_word(line))
    }
}
