//! # Corpus Normalizer

use std::sync::Arc;

use crate::{
    errors::{TPResult, TagprepError},
    normalize::{StreamNormalizer, TaggedPair},
    unknown::UnknownClassifier,
    vocab::VocabularyIndex,
};

/// Normalizes ``word<whitespace>tag`` corpus lines.
///
/// * A blank (or whitespace-only) line becomes [`TaggedPair::sentinel`];
///   blank lines are sentence boundaries and are never dropped.
/// * Otherwise the word is replaced through the [`UnknownClassifier`]
///   and the tag passes through unchanged.
/// * Any other field count is a [`TagprepError::MalformedLine`].
#[derive(Debug, Clone)]
pub struct CorpusNormalizer {
    classifier: UnknownClassifier,
}

impl CorpusNormalizer {
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
}

impl StreamNormalizer for CorpusNormalizer {
    type Output = TaggedPair;

    fn normalize_line(
        &self,
        index: usize,
        line: &str,
    ) -> TPResult<TaggedPair> {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (None, _, _) => Ok(TaggedPair::sentinel()),
            (Some(word), Some(tag), None) => {
                Ok(TaggedPair::new(self.classifier.classify(word), tag))
            }
            _ => Err(TagprepError::MalformedLine {
                line: index,
                fields: line.split_whitespace().count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unknown::{EMPTY_TAG, EMPTY_WORD, UnknownLabel};

    fn normalizer() -> CorpusNormalizer {
        CorpusNormalizer::new(Arc::new(VocabularyIndex::from_words([
            "the", "dog", "ran",
        ])))
    }

    #[test]
    fn test_scenario() {
        let processed = normalizer()
            .normalize_lines(["the NOUN", "", "Barked VERB", "quickly ADV"])
            .unwrap();

        assert_eq!(
            processed,
            vec![
                TaggedPair::new("the", "NOUN"),
                TaggedPair::new(EMPTY_WORD, EMPTY_TAG),
                TaggedPair::new(UnknownLabel::Uppercase.as_str(), "VERB"),
                // "ly" is an adjective suffix.
                TaggedPair::new(UnknownLabel::Adjective.as_str(), "ADV"),
            ]
        );
    }

    #[test]
    fn test_record_count_preserved() {
        let lines = [
            "the DT", "", "  ", "dog NN", "\t", "ran VBD", "1990s CD", "",
        ];
        let processed = normalizer().normalize_lines(lines).unwrap();
        assert_eq!(processed.len(), lines.len());
        assert_eq!(processed.iter().filter(|p| p.is_sentinel()).count(), 4);
        assert_eq!(processed[6], TaggedPair::new("--unknown-digit--", "CD"));
    }

    #[test]
    fn test_tabs_and_padding() {
        let pair = normalizer().normalize_line(0, "  dog\tNN  ").unwrap();
        assert_eq!(pair, TaggedPair::new("dog", "NN"));
    }

    #[test]
    fn test_tags_pass_through() {
        let pair = normalizer().normalize_line(0, "walked ,").unwrap();
        assert_eq!(pair.tag, ",");
        assert_eq!(pair.word, UnknownLabel::Unknown.as_str());
    }

    #[test]
    fn test_malformed_lines() {
        let normalizer = normalizer();

        let err = normalizer
            .normalize_lines(["the DT", "dog"])
            .unwrap_err();
        assert!(matches!(
            err,
            TagprepError::MalformedLine { line: 1, fields: 1 }
        ));

        let err = normalizer.normalize_line(7, "a b c").unwrap_err();
        assert!(matches!(
            err,
            TagprepError::MalformedLine { line: 7, fields: 3 }
        ));
    }
}
