//! # Tweet Tokenizer

use once_cell::sync::Lazy;
use regex::Regex;

/// Maps raw tweet text onto an ordered sequence of tokens.
pub trait TweetTokenizer: Send + Sync {
    /// Tokenize `text`.
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String>;
}

impl<F> TweetTokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self(text)
    }
}

static RETWEET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^RT\s+").expect("valid retweet pattern"));

static HYPERLINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid hyperlink pattern"));

static HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\B)@\w+").expect("valid handle pattern"));

/// Emoticons, then words (with inner apostrophes).
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[:;=][-o*']?[)\](\[dDpP/}{@|\\]|\w+(?:'\w+)*").expect("valid token pattern")
});

/// Default [`TweetTokenizer`].
///
/// 1. drops a leading ``RT`` retweet marker,
/// 2. drops hyperlinks,
/// 3. drops ``@handles`` (if `strip_handles`),
/// 4. keeps hashtag words without the ``#``,
/// 5. lowercases (unless `preserve_case`),
/// 6. emits emoticons and word tokens; other punctuation is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexTweetTokenizer {
    /// Keep the original case.
    pub preserve_case: bool,

    /// Remove ``@handle`` mentions.
    pub strip_handles: bool,
}

impl Default for RegexTweetTokenizer {
    fn default() -> Self {
        Self {
            preserve_case: false,
            strip_handles: true,
        }
    }
}

impl RegexTweetTokenizer {
    /// Set `preserve_case`.
    pub fn with_preserve_case(
        self,
        preserve_case: bool,
    ) -> Self {
        Self {
            preserve_case,
            ..self
        }
    }

    /// Set `strip_handles`.
    pub fn with_strip_handles(
        self,
        strip_handles: bool,
    ) -> Self {
        Self {
            strip_handles,
            ..self
        }
    }
}

impl TweetTokenizer for RegexTweetTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut text = RETWEET.replace(text, "").into_owned();
        text = HYPERLINK.replace_all(&text, " ").into_owned();
        if self.strip_handles {
            text = HANDLE.replace_all(&text, " ").into_owned();
        }
        if !self.preserve_case {
            text = text.to_lowercase();
        }

        TOKEN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokenizer = RegexTweetTokenizer::default();
        assert_eq!(
            tokenizer.tokenize("RT @user: Good morning #sunshine! https://t.co/x1 :)"),
            vec!["good", "morning", "sunshine", ":)"]
        );
        assert_eq!(tokenizer.tokenize("good good"), vec!["good", "good"]);
        assert_eq!(tokenizer.tokenize("it's   fine..."), vec!["it's", "fine"]);
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! ...").is_empty());
    }

    #[test]
    fn test_options() {
        let tokenizer = RegexTweetTokenizer::default()
            .with_preserve_case(true)
            .with_strip_handles(false);
        assert_eq!(
            tokenizer.tokenize("Hi @Bob"),
            vec!["Hi", "Bob"]
        );
    }

    #[test]
    fn test_email_is_not_a_handle() {
        let tokenizer = RegexTweetTokenizer::default();
        assert_eq!(
            tokenizer.tokenize("mail me@example.com"),
            vec!["mail", "me", "example", "com"]
        );
    }

    #[test]
    fn test_closure_tokenizer() {
        let tokenizer = |text: &str| -> Vec<String> {
            text.split(',').map(str::to_string).collect()
        };
        assert_eq!(TweetTokenizer::tokenize(&tokenizer, "a,b"), vec!["a", "b"]);
    }
}
