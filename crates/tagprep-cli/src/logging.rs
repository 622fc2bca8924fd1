use log::LevelFilter;
use stderrlog::Timestamp;

/// Levels selected by repeating `-v`; the first `-v` selects `Error`.
const VERBOSITY_LEVELS: [LevelFilter; 5] = [
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Stderr logging flags shared by every command.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v error .. -vvvvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level; `command_default` applies when no `-v` is given.
    pub fn level(
        &self,
        command_default: LevelFilter,
    ) -> LevelFilter {
        match self.verbose {
            0 => command_default,
            n => {
                let idx = usize::from(n - 1).min(VERBOSITY_LEVELS.len() - 1);
                VERBOSITY_LEVELS[idx]
            }
        }
    }

    /// Install `stderrlog` for the `tagprep` crates.
    pub fn setup_logging(
        &self,
        command_default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = match self.ts {
            true => Timestamp::Second,
            false => Timestamp::Off,
        };

        stderrlog::new()
            .module("tagprep")
            .quiet(self.quiet)
            .verbosity(self.level(command_default))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        logging: LogArgs,
    }

    #[test]
    fn test_command_default() {
        let args = TestCli::parse_from(["tagprep"]);
        assert!(!args.logging.quiet);
        assert_eq!(args.logging.level(LevelFilter::Info), LevelFilter::Info);
        assert_eq!(args.logging.level(LevelFilter::Warn), LevelFilter::Warn);
    }

    #[test]
    fn test_verbose_count() {
        let args = TestCli::parse_from(["tagprep", "-vvvv"]);
        assert_eq!(args.logging.verbose, 4);
        assert_eq!(args.logging.level(LevelFilter::Off), LevelFilter::Debug);

        let args = TestCli::parse_from(["tagprep", "-v"]);
        assert_eq!(args.logging.level(LevelFilter::Info), LevelFilter::Error);

        let args = TestCli::parse_from(["tagprep", "-vvvvvvvv", "--ts", "-q"]);
        assert_eq!(args.logging.level(LevelFilter::Off), LevelFilter::Trace);
        assert!(args.logging.ts);
        assert!(args.logging.quiet);
    }
}
