//! # Unknown Label Cascade
//!
//! An ordered table of ``(predicate, label)`` rules, evaluated top-to-bottom.

use crate::unknown::{
    UnknownLabel,
    suffixes::{ADJECTIVE_SUFFIXES, ADVERB_SUFFIXES, NOUN_SUFFIXES, VERB_SUFFIXES, ends_with_any},
};

/// One step of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct CascadeRule {
    /// The label assigned when [`CascadeRule::matches`] holds.
    pub label: UnknownLabel,

    /// The rule predicate.
    pub matches: fn(&str) -> bool,
}

fn has_digit(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_digit())
}

fn has_punctuation(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_punctuation())
}

fn has_uppercase(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_uppercase())
}

fn has_noun_suffix(word: &str) -> bool {
    ends_with_any(word, NOUN_SUFFIXES)
}

fn has_verb_suffix(word: &str) -> bool {
    ends_with_any(word, VERB_SUFFIXES)
}

fn has_adjective_suffix(word: &str) -> bool {
    ends_with_any(word, ADJECTIVE_SUFFIXES)
}

fn has_adverb_suffix(word: &str) -> bool {
    ends_with_any(word, ADVERB_SUFFIXES)
}

/// The cascade, in priority order.
///
/// The generic [`UnknownLabel::Unknown`] is the fallthrough and has no rule.
pub const CASCADE_RULES: &[CascadeRule] = &[
    CascadeRule {
        label: UnknownLabel::Digit,
        matches: has_digit,
    },
    CascadeRule {
        label: UnknownLabel::Punctuation,
        matches: has_punctuation,
    },
    CascadeRule {
        label: UnknownLabel::Uppercase,
        matches: has_uppercase,
    },
    CascadeRule {
        label: UnknownLabel::Noun,
        matches: has_noun_suffix,
    },
    CascadeRule {
        label: UnknownLabel::Verb,
        matches: has_verb_suffix,
    },
    CascadeRule {
        label: UnknownLabel::Adjective,
        matches: has_adjective_suffix,
    },
    CascadeRule {
        label: UnknownLabel::Adverb,
        matches: has_adverb_suffix,
    },
];

/// Label a word known to be out-of-vocabulary.
///
/// Total; every input maps to exactly one label.
pub fn label_unknown(word: &str) -> UnknownLabel {
    CASCADE_RULES
        .iter()
        .find(|rule| (rule.matches)(word))
        .map_or(UnknownLabel::Unknown, |rule| rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<UnknownLabel> = CASCADE_RULES.iter().map(|r| r.label).collect();
        assert_eq!(
            order,
            vec![
                UnknownLabel::Digit,
                UnknownLabel::Punctuation,
                UnknownLabel::Uppercase,
                UnknownLabel::Noun,
                UnknownLabel::Verb,
                UnknownLabel::Adjective,
                UnknownLabel::Adverb,
            ]
        );
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(label_unknown("1990s"), UnknownLabel::Digit);
        assert_eq!(label_unknown("co-op"), UnknownLabel::Punctuation);
        assert_eq!(label_unknown("Zyx"), UnknownLabel::Uppercase);
        assert_eq!(label_unknown("statehood"), UnknownLabel::Noun);
        assert_eq!(label_unknown("modernize"), UnknownLabel::Verb);
        assert_eq!(label_unknown("quickly"), UnknownLabel::Adjective);
        assert_eq!(label_unknown("skyward"), UnknownLabel::Adverb);
        assert_eq!(label_unknown("walk"), UnknownLabel::Unknown);
        assert_eq!(label_unknown(""), UnknownLabel::Unknown);
    }

    #[test]
    fn test_priority() {
        // digit outranks punctuation, case, and suffix.
        assert_eq!(label_unknown("A-1ment"), UnknownLabel::Digit);
        // punctuation outranks case.
        assert_eq!(label_unknown("U.S."), UnknownLabel::Punctuation);
        // case outranks suffix.
        assert_eq!(label_unknown("Government"), UnknownLabel::Uppercase);
        assert_eq!(label_unknown("sorry"), UnknownLabel::Noun);
        // "wise" is both a verb ("ise") and an adverb suffix; verb wins.
        assert_eq!(label_unknown("clockwise"), UnknownLabel::Verb);
        assert_eq!(label_unknown("towards"), UnknownLabel::Adverb);
    }

    #[test]
    fn test_single_letter_adjective_suffix() {
        assert_eq!(label_unknown("i"), UnknownLabel::Adjective);
        assert_eq!(label_unknown("salami"), UnknownLabel::Adjective);
        assert_eq!(label_unknown("x"), UnknownLabel::Unknown);
    }

    #[test]
    fn test_non_ascii_is_not_special() {
        assert_eq!(label_unknown("café"), UnknownLabel::Unknown);
        assert_eq!(label_unknown("Éa"), UnknownLabel::Unknown);
        assert_eq!(label_unknown("٣"), UnknownLabel::Unknown);
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(500))]

        #[test]
        fn digit_always_wins(prefix in "\\PC{0,12}", digit in "[0-9]", suffix in "\\PC{0,12}") {
            let word = format!("{prefix}{digit}{suffix}");
            proptest::prop_assert_eq!(label_unknown(&word), UnknownLabel::Digit);
        }

        #[test]
        fn deterministic(word in "\\PC{0,24}") {
            proptest::prop_assert_eq!(label_unknown(&word), label_unknown(&word));
        }
    }
}
