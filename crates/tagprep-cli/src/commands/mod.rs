mod classify;
mod corpus;
mod vectorize;

/// Subcommands for tagprep
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Classify words against a vocabulary.
    Classify(classify::ClassifyArgs),

    /// Print a processed corpus split.
    Corpus(corpus::CorpusCommandArgs),

    /// Vectorize tweets into sentiment feature rows.
    Vectorize(vectorize::VectorizeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Classify(cmd) => cmd.run(),
            Commands::Corpus(cmd) => cmd.run(),
            Commands::Vectorize(cmd) => cmd.run(),
        }
    }
}
