#![allow(missing_docs)]

use std::{fs, sync::Arc};

use tagprep::{
    CorpusLoader,
    CorpusPaths,
    StreamNormalizer,
    TaggedPair,
    UnknownLabel,
    WordNormalizer,
    sentiment::{RegexTweetTokenizer, TweetVectorizer, WordCounter},
    unknown::EMPTY_WORD,
};

const VOCAB: &str = "ran\nthe\ndog\n--n--\n";

const TRAINING: &str = "\
The DT
dog NN
ran VBD
in IN
1990 CD
. .

the DT
co-op NN
";

#[test]
fn test_loader_pipeline() {
    let dir = tempdir::TempDir::new("pipeline_test").unwrap();
    let vocab_path = dir.path().join("vocab.txt");
    let training_path = dir.path().join("train.pos");
    let words_path = dir.path().join("test.words");
    fs::write(&vocab_path, VOCAB).unwrap();
    fs::write(&training_path, TRAINING).unwrap();
    fs::write(&words_path, "the\nDog\n\nwalked\n").unwrap();

    let loader = CorpusLoader::new(
        CorpusPaths::default()
            .with_vocabulary(Some(&vocab_path))
            .with_training_corpus(Some(&training_path))
            .with_test_words(Some(&words_path)),
    );

    // The trailing newline of the vocabulary contributes an empty word.
    assert_eq!(
        loader.vocabulary_words().unwrap(),
        &["", "--n--", "dog", "ran", "the"]
    );

    let processed = loader.processed_training().unwrap();
    assert_eq!(processed.len(), TRAINING.split('\n').count());
    assert_eq!(
        processed,
        &[
            TaggedPair::new(UnknownLabel::Uppercase.as_str(), "DT"),
            TaggedPair::new("dog", "NN"),
            TaggedPair::new("ran", "VBD"),
            TaggedPair::new(UnknownLabel::Unknown.as_str(), "IN"),
            TaggedPair::new(UnknownLabel::Digit.as_str(), "CD"),
            TaggedPair::new(UnknownLabel::Punctuation.as_str(), "."),
            TaggedPair::sentinel(),
            TaggedPair::new("the", "DT"),
            TaggedPair::new(UnknownLabel::Punctuation.as_str(), "NN"),
            TaggedPair::sentinel(),
        ]
    );

    assert_eq!(
        loader.test_words().unwrap(),
        &[
            "the".to_string(),
            UnknownLabel::Uppercase.to_string(),
            EMPTY_WORD.to_string(),
            UnknownLabel::Unknown.to_string(),
            EMPTY_WORD.to_string(),
        ]
    );

    // A normalizer built from the loader's vocabulary agrees with it.
    let normalizer = WordNormalizer::new(Arc::clone(loader.vocabulary().unwrap()));
    assert_eq!(
        normalizer
            .normalize_lines(["the", "Dog", "", "walked", ""])
            .unwrap(),
        loader.test_words().unwrap()
    );
}

#[test]
fn test_sentiment_pipeline() {
    let tokenizer = RegexTweetTokenizer::default();

    let mut counter = WordCounter::default();
    counter
        .update_from_tweets(
            &tokenizer,
            [
                ("I am happy :)", 1),
                ("happy happy day", 1),
                ("so sad today :(", 0),
            ],
        )
        .unwrap();

    let vectorizer = TweetVectorizer::new(["Happy!", "sad day", "nothing here"], counter);
    vectorizer.check_rep().unwrap();

    assert_eq!(
        vectorizer.vectors(),
        &[[1.0, 3.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 0.0]]
    );
}
