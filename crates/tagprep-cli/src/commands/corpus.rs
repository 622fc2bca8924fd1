use std::io::Write;

use crate::{corpus_args::CorpusArgs, input_output::OutputArgs, logging::LogArgs};

/// Corpus splits.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Split {
    /// The processed training corpus, as `word<TAB>tag` lines.
    Training,

    /// The processed test words, one per line.
    TestWords,
}

/// Args for the corpus command.
#[derive(clap::Args, Debug)]
pub struct CorpusCommandArgs {
    /// Which split to print.
    #[arg(long, value_enum, default_value = "training")]
    split: Split,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    corpus: CorpusArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CorpusCommandArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Info)?;

        let loader = self.corpus.loader();
        let mut writer = self.output.open_writer()?;

        match self.split {
            Split::Training => {
                let processed = loader.processed_training()?;
                log::info!("processed {} training pairs", processed.len());
                for pair in processed {
                    writeln!(writer, "{pair}")?;
                }
            }
            Split::TestWords => {
                let words = loader.test_words()?;
                log::info!("processed {} test words", words.len());
                for word in words {
                    writeln!(writer, "{word}")?;
                }
            }
        }
        writer.flush()?;

        Ok(())
    }
}
