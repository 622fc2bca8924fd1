//! # Morphological Suffix Tables
//!
//! Fixed, small lists; no claim of linguistic completeness.

/// Noun suffixes.
pub const NOUN_SUFFIXES: &[&str] = &[
    "action", "age", "ance", "cy", "dom", "ee", "ence", "er", "hood", "ion", "ism", "ist", "ity",
    "ling", "ment", "ness", "or", "ry", "scape", "ship", "ty",
];

/// Verb suffixes.
pub const VERB_SUFFIXES: &[&str] = &["ate", "ify", "ise", "ize"];

/// Adjective suffixes.
///
/// Note: the single-letter suffix ``"i"`` matches any remaining word ending
/// in ``i``; trained models depend on this.
pub const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ese", "ful", "i", "ian", "ible", "ic", "ish", "ive", "less", "ly", "ous",
];

/// Adverb suffixes.
pub const ADVERB_SUFFIXES: &[&str] = &["ward", "wards", "wise"];

/// Does `word` end with any of `suffixes`?
pub fn ends_with_any(
    word: &str,
    suffixes: &[&str],
) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}
