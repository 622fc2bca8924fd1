//! # Tweet Sentiment Features
//!
//! Tweets are tokenized and summarized as a [`FeatureVector`]:
//! ``[bias, positive_count, negative_count]``, where the counts are sums of
//! per-token counts from a [`TokenCounts`] table.
//!
//! * [`TweetTokenizer`] - the tokenizer collaborator; [`RegexTweetTokenizer`] is the default.
//! * [`TokenCounts`] - the ``(token, class) -> count`` collaborator; [`WordCounter`] builds one.
//! * [`TweetVectorizer`] - builds and caches the feature matrix.

pub mod sentiment_class;
pub mod token_counts;
pub mod tweet_tokenizer;
pub mod tweet_vectorizer;

#[doc(inline)]
pub use sentiment_class::{FeatureColumn, SentimentClass};
#[doc(inline)]
pub use token_counts::{TokenClassCounts, TokenCounts, WordCounter};
#[doc(inline)]
pub use tweet_tokenizer::{RegexTweetTokenizer, TweetTokenizer};
#[doc(inline)]
pub use tweet_vectorizer::{FeatureVector, TweetVectorizer};
