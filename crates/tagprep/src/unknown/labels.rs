//! # Unknown Labels and Sentinels

/// Placeholder word substituted for a blank corpus line.
pub const EMPTY_WORD: &str = "--n--";

/// Placeholder tag substituted for a blank corpus line.
pub const EMPTY_TAG: &str = "--s--";

/// Synthetic vocabulary item standing in for an out-of-vocabulary word.
///
/// Downstream, labels are ordinary tokens; use [`UnknownLabel::as_str`]
/// (or `Display`) for the token spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
pub enum UnknownLabel {
    /// Contains an ASCII digit.
    #[strum(serialize = "--unknown-digit--")]
    Digit,

    /// Contains ASCII punctuation.
    #[strum(serialize = "--unknown-punctuation--")]
    Punctuation,

    /// Contains an ASCII uppercase letter.
    #[strum(serialize = "--unknown-uppercase--")]
    Uppercase,

    /// Ends with a noun suffix.
    #[strum(serialize = "--unknown-noun--")]
    Noun,

    /// Ends with a verb suffix.
    #[strum(serialize = "--unknown-verb--")]
    Verb,

    /// Ends with an adjective suffix.
    #[strum(serialize = "--unknown-adjective--")]
    Adjective,

    /// Ends with an adverb suffix.
    #[strum(serialize = "--unknown-adverb--")]
    Adverb,

    /// Nothing else matched.
    #[strum(serialize = "--unknown--")]
    Unknown,
}

impl UnknownLabel {
    /// The token spelling of this label.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Is `token` the spelling of some label?
    pub fn is_label(token: &str) -> bool {
        token.parse::<UnknownLabel>().is_ok()
    }
}

impl AsRef<str> for UnknownLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
