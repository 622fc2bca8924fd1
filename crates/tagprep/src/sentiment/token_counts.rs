//! # Token Class Counts

use std::{collections::HashMap, hash::BuildHasher, sync::Arc};

use crate::{
    errors::TPResult,
    sentiment::{SentimentClass, TweetTokenizer},
    types::TPHashMap,
};

/// A ``(token, class) -> count`` table.
///
/// Implementations must return ``0`` for unseen combinations.
pub trait TokenCounts: Send + Sync {
    /// The count of `token` in tweets labelled `class`.
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64;
}

/// `{ (String, SentimentClass) -> u64 }` map.
///
/// Each lookup builds an owned ``(String, SentimentClass)`` key;
/// [`WordCounter`] is keyed by token and looks up without allocating.
pub type TokenClassCounts = TPHashMap<(String, SentimentClass), u64>;

impl<S> TokenCounts for HashMap<(String, SentimentClass), u64, S>
where
    S: BuildHasher + Send + Sync,
{
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64 {
        self.get(&(token.to_string(), class)).copied().unwrap_or(0)
    }
}

#[cfg(feature = "ahash")]
impl TokenCounts for ahash::AHashMap<(String, SentimentClass), u64> {
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64 {
        (**self).count(token, class)
    }
}

impl<C: TokenCounts + ?Sized> TokenCounts for &C {
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64 {
        (**self).count(token, class)
    }
}

impl<C: TokenCounts + ?Sized> TokenCounts for Arc<C> {
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64 {
        (**self).count(token, class)
    }
}

/// Word counter over labelled tweets.
///
/// Counts are indexed by token, then by [`SentimentClass`] label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCounter {
    counts: TPHashMap<String, [u64; 2]>,
}

impl WordCounter {
    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add `n` to the count of ``(token, class)``.
    pub fn add(
        &mut self,
        token: &str,
        class: SentimentClass,
        n: u64,
    ) {
        match self.counts.get_mut(token) {
            Some(row) => row[class as usize] += n,
            None => {
                let mut row = [0; 2];
                row[class as usize] = n;
                self.counts.insert(token.to_string(), row);
            }
        }
    }

    /// Count each token once, under `class`.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
        class: SentimentClass,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref(), class, 1);
        }
    }

    /// Tokenize and count labelled tweets.
    ///
    /// ## Arguments
    /// * `tokenizer` - splits each tweet into tokens.
    /// * `samples` - ``(tweet, label)`` pairs; labels are ``0`` or ``1``.
    ///
    /// ## Errors
    /// [`crate::TagprepError::UnknownClass`] for any other label; counts
    /// from samples before it are kept.
    pub fn update_from_tweets<T, I, S>(
        &mut self,
        tokenizer: &T,
        samples: I,
    ) -> TPResult<()>
    where
        T: TweetTokenizer + ?Sized,
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        for (tweet, label) in samples {
            let class = SentimentClass::from_label(label)?;
            self.update_from_tokens(tokenizer.tokenize(tweet.as_ref()), class);
        }
        Ok(())
    }

    /// Flatten into a [`TokenClassCounts`] map; zero counts are omitted.
    pub fn to_token_class_counts(&self) -> TokenClassCounts {
        let mut map = TokenClassCounts::default();
        for (token, row) in self.counts.iter() {
            for class in [SentimentClass::Negative, SentimentClass::Positive] {
                let n = row[class as usize];
                if n > 0 {
                    map.insert((token.clone(), class), n);
                }
            }
        }
        map
    }
}

impl TokenCounts for WordCounter {
    fn count(
        &self,
        token: &str,
        class: SentimentClass,
    ) -> u64 {
        self.counts.get(token).map_or(0, |row| row[class as usize])
    }
}
