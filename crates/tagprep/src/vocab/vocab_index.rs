//! # Vocabulary Index ``{ String -> usize }``

use crate::types::TPHashMap;

/// Known-word index, built once from a sorted word list.
///
/// The rank of a word is its position in the list the index was built from.
/// Ranks are presence witnesses; if a word appears more than once, the last
/// position wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyIndex {
    word_ranks: TPHashMap<String, usize>,
}

impl VocabularyIndex {
    /// Build an index from words already sorted by the caller.
    ///
    /// ## Arguments
    /// * `words` - the sorted word list.
    pub fn from_sorted_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words = words.into_iter();
        let mut word_ranks = TPHashMap::with_capacity(words.size_hint().0);
        for (rank, word) in words.enumerate() {
            word_ranks.insert(word.into(), rank);
        }
        word_ranks.shrink_to_fit();
        Self { word_ranks }
    }

    /// Build an index from words in any order; they are sorted first.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort();
        Self::from_sorted_words(words)
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.word_ranks.len()
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.word_ranks.is_empty()
    }

    /// Is `word` a known word?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_ranks.contains_key(word)
    }

    /// The rank of `word`, if known.
    pub fn rank(
        &self,
        word: &str,
    ) -> Option<usize> {
        self.word_ranks.get(word).copied()
    }

    /// Iterate over ``(word, rank)`` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.word_ranks.iter().map(|(w, &r)| (w.as_str(), r))
    }
}

impl<S: Into<String>> FromIterator<S> for VocabularyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
