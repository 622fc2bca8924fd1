//! # Sentiment Classes and Feature Columns

use crate::errors::{TPResult, TagprepError};

/// Binary tweet sentiment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum SentimentClass {
    /// Label ``0``.
    Negative = 0,

    /// Label ``1``.
    Positive = 1,
}

impl SentimentClass {
    /// The numeric label.
    pub fn label(self) -> i64 {
        self as i64
    }

    /// Parse a numeric label.
    ///
    /// ## Errors
    /// [`TagprepError::UnknownClass`] for anything but ``0`` or ``1``.
    pub fn from_label(label: i64) -> TPResult<Self> {
        match label {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            other => Err(TagprepError::UnknownClass(other)),
        }
    }
}

impl TryFrom<i64> for SentimentClass {
    type Error = TagprepError;

    fn try_from(label: i64) -> TPResult<Self> {
        Self::from_label(label)
    }
}

/// Column positions within a [`crate::sentiment::FeatureVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum FeatureColumn {
    /// The constant bias term.
    Bias = 0,

    /// Summed positive counts.
    Positive = 1,

    /// Summed negative counts.
    Negative = 2,
}

impl FeatureColumn {
    /// The column index.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SentimentClass::from_label(1).unwrap(), SentimentClass::Positive);
        assert_eq!(SentimentClass::try_from(0).unwrap(), SentimentClass::Negative);
        assert_eq!(SentimentClass::Positive.label(), 1);
        assert_eq!(SentimentClass::Negative.to_string(), "negative");
        assert!(matches!(
            SentimentClass::from_label(2),
            Err(TagprepError::UnknownClass(2))
        ));
    }

    #[test]
    fn test_columns() {
        assert_eq!(FeatureColumn::Bias.index(), 0);
        assert_eq!(FeatureColumn::Positive.index(), 1);
        assert_eq!(FeatureColumn::Negative.index(), 2);
    }
}
