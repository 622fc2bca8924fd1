//! # Vocabulary
//!
//! The closed set of words treated as "known"; everything else is mapped
//! to an [`crate::unknown::UnknownLabel`].
//!
//! * [`VocabularyIndex`] - the ``{ word -> rank }`` index.
//! * [`io`] - whole-file line loading.

pub mod io;
pub mod vocab_index;

#[doc(inline)]
pub use vocab_index::VocabularyIndex;
