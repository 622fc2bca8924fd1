use std::{io::Write, sync::Arc};

use tagprep::{
    UnknownClassifier,
    VocabularyIndex,
    vocab::io::load_vocabulary_words,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the classify command.
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Words to classify; if empty, words are read one per line from the input.
    words: Vec<String>,

    /// Vocabulary word list.
    #[arg(long)]
    vocabulary: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ClassifyArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Warn)?;

        let vocab = VocabularyIndex::from_sorted_words(load_vocabulary_words(&self.vocabulary)?);
        log::info!("vocabulary size: {}", vocab.len());
        let classifier = UnknownClassifier::new(Arc::new(vocab));

        let words = if self.words.is_empty() {
            self.input.read_lines()?
        } else {
            self.words.clone()
        };

        let mut writer = self.output.open_writer()?;
        for word in &words {
            writeln!(writer, "{}\t{}", word, classifier.classify(word).as_str())?;
        }
        writer.flush()?;

        Ok(())
    }
}
