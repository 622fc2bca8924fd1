use std::io::Write;

use tagprep::sentiment::{RegexTweetTokenizer, TweetVectorizer, WordCounter};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vectorize command.
#[derive(clap::Args, Debug)]
pub struct VectorizeArgs {
    /// Labelled tweets used for the counts; `label<TAB>tweet` lines, labels 0 or 1.
    #[arg(long)]
    labeled: String,

    // Tweets to vectorize, one per line; defaults to the labelled tweets.
    #[command(flatten)]
    input: InputArgs,

    /// Bias constant.
    #[arg(long, default_value_t = 1.0)]
    bias: f64,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VectorizeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Info)?;

        let samples = read_labeled(&self.labeled)?;
        log::info!("read {} labelled tweets", samples.len());

        let tokenizer = RegexTweetTokenizer::default();
        let mut counter = WordCounter::default();
        counter.update_from_tweets(
            &tokenizer,
            samples.iter().map(|(label, tweet)| (tweet.as_str(), *label)),
        )?;
        log::info!("counted {} distinct tokens", counter.len());

        let tweets: Vec<String> = match &self.input.input {
            Some(_) => self.input.read_lines()?,
            None => samples.into_iter().map(|(_, tweet)| tweet).collect(),
        };

        let vectorizer =
            TweetVectorizer::with_tokenizer(tweets, counter, tokenizer).with_bias(self.bias);
        vectorizer.check_rep()?;

        let mut writer = self.output.open_writer()?;
        for [bias, positive, negative] in vectorizer.vectors() {
            writeln!(writer, "{bias},{positive},{negative}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn read_labeled(path: &str) -> Result<Vec<(i64, String)>, Box<dyn std::error::Error>> {
    let mut samples = Vec::new();
    for (index, line) in tagprep::vocab::io::load_lines(path)?.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (label, tweet) = line
            .split_once('\t')
            .ok_or_else(|| format!("line {index}: expected label<TAB>tweet"))?;
        samples.push((label.trim().parse()?, tweet.to_string()));
    }
    Ok(samples)
}
