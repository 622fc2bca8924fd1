//! # Tweet Vectorizer

use once_cell::sync::OnceCell;

use crate::{
    errors::{TPResult, TagprepError},
    sentiment::{FeatureColumn, RegexTweetTokenizer, SentimentClass, TokenCounts, TweetTokenizer},
};

/// ``[bias, positive_count, negative_count]``; see [`FeatureColumn`].
pub type FeatureVector = [f64; 3];

/// Converts tweets into [`FeatureVector`] rows.
///
/// The feature matrix ([`TweetVectorizer::vectors`]) is computed once and
/// cached. Mutating the tweets or counter through
/// [`TweetVectorizer::tweets_mut`] / [`TweetVectorizer::counter_mut`] does
/// not invalidate it; call [`TweetVectorizer::reset`].
#[derive(Debug)]
pub struct TweetVectorizer<C, P = RegexTweetTokenizer>
where
    C: TokenCounts,
    P: TweetTokenizer,
{
    tweets: Vec<String>,
    counter: C,
    bias: f64,
    process: P,
    vectors: OnceCell<Vec<FeatureVector>>,
}

impl<C: TokenCounts> TweetVectorizer<C> {
    /// Build a vectorizer with the default tokenizer and a bias of ``1``.
    ///
    /// ## Arguments
    /// * `tweets` - the raw tweets to vectorize.
    /// * `counter` - the token/class count table.
    pub fn new<I>(
        tweets: I,
        counter: C,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::with_tokenizer(tweets, counter, RegexTweetTokenizer::default())
    }
}

impl<C, P> TweetVectorizer<C, P>
where
    C: TokenCounts,
    P: TweetTokenizer,
{
    /// Build a vectorizer with an explicit tokenizer and a bias of ``1``.
    pub fn with_tokenizer<I>(
        tweets: I,
        counter: C,
        process: P,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            tweets: tweets.into_iter().map(Into::into).collect(),
            counter,
            bias: 1.0,
            process,
            vectors: OnceCell::new(),
        }
    }

    /// Set the bias constant; invalidates the cached matrix.
    pub fn with_bias(
        mut self,
        bias: f64,
    ) -> Self {
        self.bias = bias;
        self.reset();
        self
    }

    /// The bias constant.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The tweets.
    pub fn tweets(&self) -> &[String] {
        &self.tweets
    }

    /// Mutable tweets; does not invalidate the cached matrix.
    pub fn tweets_mut(&mut self) -> &mut Vec<String> {
        &mut self.tweets
    }

    /// The count table.
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Mutable count table; does not invalidate the cached matrix.
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }

    /// The tokenizer.
    pub fn process(&self) -> &P {
        &self.process
    }

    /// Convert one tweet to a [`FeatureVector`].
    ///
    /// Unseen ``(token, class)`` combinations count as zero.
    pub fn extract_features(
        &self,
        tweet: &str,
    ) -> FeatureVector {
        self.features_of_tokens(self.process.tokenize(tweet))
    }

    /// Convert already-tokenized text to a [`FeatureVector`].
    pub fn features_of_tokens<I>(
        &self,
        tokens: I,
    ) -> FeatureVector
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut vector: FeatureVector = [0.0; 3];
        vector[FeatureColumn::Bias.index()] = self.bias;

        let (mut positive, mut negative) = (0u64, 0u64);
        for token in tokens {
            let token = token.as_ref();
            positive += self.counter.count(token, SentimentClass::Positive);
            negative += self.counter.count(token, SentimentClass::Negative);
        }
        vector[FeatureColumn::Positive.index()] = positive as f64;
        vector[FeatureColumn::Negative.index()] = negative as f64;
        vector
    }

    /// The feature matrix; one row per tweet, in order.
    ///
    /// Computed on first access, then cached until [`Self::reset`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn vectors(&self) -> &[FeatureVector] {
        self.vectors.get_or_init(|| {
            log::debug!("vectorizing {} tweets", self.tweets.len());
            self.tweets
                .iter()
                .map(|tweet| self.extract_features(tweet))
                .collect()
        })
    }

    /// Drop the cached matrix without recomputing it.
    pub fn reset(&mut self) {
        self.vectors = OnceCell::new();
    }

    /// Check the vectorizer's inputs.
    ///
    /// Tweets are strings and the counter is a [`TokenCounts`] by
    /// construction; the remaining check is that the bias is finite.
    ///
    /// ## Errors
    /// [`TagprepError::Representation`] naming the first failed check.
    pub fn check_rep(&self) -> TPResult<()> {
        if !self.bias.is_finite() {
            return Err(TagprepError::Representation(format!(
                "bias must be finite, got {}",
                self.bias
            )));
        }
        Ok(())
    }
}
