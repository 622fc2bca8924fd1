//! # Unknown Classifier

use std::sync::Arc;

use crate::{
    unknown::{UnknownLabel, cascade::label_unknown},
    vocab::VocabularyIndex,
};

/// The outcome of classifying one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified<'w> {
    /// The word is in the vocabulary and passes through unchanged.
    Known(&'w str),

    /// The word is out-of-vocabulary.
    Unknown(UnknownLabel),
}

impl<'w> Classified<'w> {
    /// The token this classification emits.
    pub fn as_str(&self) -> &'w str {
        match *self {
            Classified::Known(word) => word,
            Classified::Unknown(label) => label.as_str(),
        }
    }

    /// Was the word known?
    pub fn is_known(&self) -> bool {
        matches!(self, Classified::Known(_))
    }

    /// The label, if the word was unknown.
    pub fn label(&self) -> Option<UnknownLabel> {
        match *self {
            Classified::Known(_) => None,
            Classified::Unknown(label) => Some(label),
        }
    }
}

impl From<Classified<'_>> for String {
    fn from(value: Classified<'_>) -> Self {
        value.as_str().to_string()
    }
}

/// Maps any word to itself (if known) or to an [`UnknownLabel`].
///
/// Deterministic, side-effect free, and total.
#[derive(Debug, Clone)]
pub struct UnknownClassifier {
    vocab: Arc<VocabularyIndex>,
}

impl UnknownClassifier {
    /// Bind a classifier to a vocabulary.
    pub fn new(vocab: Arc<VocabularyIndex>) -> Self {
        Self { vocab }
    }

    /// The bound vocabulary.
    pub fn vocab(&self) -> &Arc<VocabularyIndex> {
        &self.vocab
    }

    /// Classify `word`.
    pub fn classify<'w>(
        &self,
        word: &'w str,
    ) -> Classified<'w> {
        if self.vocab.contains(word) {
            Classified::Known(word)
        } else {
            Classified::Unknown(label_unknown(word))
        }
    }

    /// Classify `word` and return the emitted token.
    pub fn classify_token(
        &self,
        word: &str,
    ) -> String {
        self.classify(word).into()
    }
}
