use tagprep::{CorpusLoader, CorpusPaths, loader::WSJ_ENV_KEYS};

/// Corpus source arg group.
///
/// Each flag overrides its environment variable.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Training corpus; defaults to `$WALL_STREET_JOURNAL_POS`.
    #[arg(long)]
    training_corpus: Option<String>,

    /// Vocabulary word list; defaults to `$WALL_STREET_JOURNAL_VOCABULARY`.
    #[arg(long)]
    vocabulary: Option<String>,

    /// Test corpus; defaults to `$WALL_STREET_JOURNAL_TEST_POS`.
    #[arg(long)]
    test_corpus: Option<String>,

    /// Test words; defaults to `$WALL_STREET_JOURNAL_TEST_WORDS`.
    #[arg(long)]
    test_words: Option<String>,
}

impl CorpusArgs {
    /// Resolve the corpus paths.
    pub fn paths(&self) -> CorpusPaths {
        WSJ_ENV_KEYS.resolve(
            CorpusPaths::default()
                .with_training_corpus(self.training_corpus.as_ref())
                .with_vocabulary(self.vocabulary.as_ref())
                .with_test_corpus(self.test_corpus.as_ref())
                .with_test_words(self.test_words.as_ref()),
        )
    }

    /// Build a loader over the resolved paths.
    pub fn loader(&self) -> CorpusLoader {
        CorpusLoader::new(self.paths())
    }
}
