//! # Tagged Pair

use core::fmt::{Display, Formatter};

use crate::unknown::{EMPTY_TAG, EMPTY_WORD};

/// A ``(token, tag)`` record from a part-of-speech corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaggedPair {
    /// The word, or the label standing in for it.
    pub word: String,

    /// The externally defined tag.
    pub tag: String,
}

impl TaggedPair {
    /// Build a pair.
    pub fn new<W: Into<String>, T: Into<String>>(
        word: W,
        tag: T,
    ) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// The sentinel pair substituted for a blank line.
    pub fn sentinel() -> Self {
        Self::new(EMPTY_WORD, EMPTY_TAG)
    }

    /// Is this the sentinel pair?
    pub fn is_sentinel(&self) -> bool {
        self.word == EMPTY_WORD && self.tag == EMPTY_TAG
    }
}

impl From<(String, String)> for TaggedPair {
    fn from((word, tag): (String, String)) -> Self {
        Self { word, tag }
    }
}

impl From<TaggedPair> for (String, String) {
    fn from(pair: TaggedPair) -> Self {
        (pair.word, pair.tag)
    }
}

/// Formats as ``word\ttag``.
impl Display for TaggedPair {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{}\t{}", self.word, self.tag)
    }
}
