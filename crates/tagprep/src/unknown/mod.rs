//! # Unknown Word Labelling
//!
//! Out-of-vocabulary words are replaced by one of a small, fixed set of
//! synthetic labels. The labels keep enough lexical signal (digits,
//! punctuation, capitalization, suffix class) for a tagger to generalize.
//!
//! The cascade is a strict priority list; the first matching rule wins:
//!
//! | Priority | Rule                              | Label                          |
//! | -------- | --------------------------------- | ------------------------------ |
//! | 0        | word is in the vocabulary         | the word itself                |
//! | 1        | any ASCII digit                   | [`UnknownLabel::Digit`]        |
//! | 2        | any ASCII punctuation             | [`UnknownLabel::Punctuation`]  |
//! | 3        | any ASCII uppercase letter        | [`UnknownLabel::Uppercase`]    |
//! | 4        | ends with a [`NOUN_SUFFIXES`]      | [`UnknownLabel::Noun`]         |
//! | 5        | ends with a [`VERB_SUFFIXES`]      | [`UnknownLabel::Verb`]         |
//! | 6        | ends with a [`ADJECTIVE_SUFFIXES`] | [`UnknownLabel::Adjective`]    |
//! | 7        | ends with a [`ADVERB_SUFFIXES`]    | [`UnknownLabel::Adverb`]       |
//! | 8        | otherwise                         | [`UnknownLabel::Unknown`]      |

pub mod cascade;
pub mod classifier;
pub mod labels;
pub mod suffixes;

#[doc(inline)]
pub use cascade::{CASCADE_RULES, CascadeRule, label_unknown};
#[doc(inline)]
pub use classifier::{Classified, UnknownClassifier};
#[doc(inline)]
pub use labels::{EMPTY_TAG, EMPTY_WORD, UnknownLabel};
#[doc(inline)]
pub use suffixes::{ADJECTIVE_SUFFIXES, ADVERB_SUFFIXES, NOUN_SUFFIXES, VERB_SUFFIXES};
