//! Bytepair CLI - trains a byte-level BPE over one file.
//!
//! This is the main entry point for the `bytepair` command-line tool.

mod commands;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use commands::TrainCommand;

#[derive(Parser, Debug)]
#[command(name = "bytepair")]
#[command(about = "Learn byte-pair merges from a file and decode the result", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease log verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(flatten)]
    train: TrainCommand,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    init_logging(cli.verbose, cli.quiet);
    commands::train::run(cli.train)
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Info,
        (0, 2) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Error,
        _ => LevelFilter::Off,
    };

    let mut builder = env_logger::Builder::new();
    builder.format_timestamp_millis();
    builder.filter_level(level);
    builder.parse_default_env();
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_single_positional() {
        let cli = Cli::try_parse_from(["bytepair", "corpus.txt"]).unwrap();
        assert_eq!(cli.train.input, PathBuf::from("corpus.txt"));
        assert_eq!(cli.train.min_frequency, 2);
        assert!(cli.train.merges_out.is_none());
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert!(Cli::try_parse_from(["bytepair"]).is_err());
        assert!(Cli::try_parse_from(["bytepair", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "bytepair",
            "-vv",
            "--min-frequency",
            "3",
            "--merges-out",
            "merges.json",
            "corpus.bin",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.train.min_frequency, 3);
        assert_eq!(cli.train.merges_out, Some(PathBuf::from("merges.json")));
    }
}
