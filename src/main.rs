//! Word Ladder - CLI
//!
//! Finds a chain of dictionary words from one word to another, changing one
//! letter position per step.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use word_ladder::{
    commands::{LadderConfig, run_ladder},
    dictionary::{Dictionary, FileDictionary, WordList},
    output::{ConsoleReporter, print_ladder_report},
    solver::{DEFAULT_MAX_RELAXATION, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver: memoized depth-first search or greedy hill climbing",
    version,
    author
)]
struct Cli {
    /// Word to start from
    start: String,

    /// Word to reach
    end: String,

    /// Strategy: explore (default, depth-first with dead-end memo) or greedy
    #[arg(short, long, default_value = "explore")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Re-read the wordlist file for every lookup instead of loading it once
    #[arg(long)]
    stream: bool,

    /// Greedy strategy: how many times a step may relax its target distance
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_RELAXATION)]
    max_relaxation: usize,

    /// Show a single status line instead of printing every visit
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let strategy = StrategyKind::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected 'explore' or 'greedy')",
            cli.strategy
        )
    })?;

    let config = LadderConfig::new(cli.start.clone(), cli.end.clone())
        .with_strategy(strategy)
        .with_max_relaxation(cli.max_relaxation);

    match (cli.wordlist.as_str(), cli.stream) {
        ("embedded", true) => bail!("--stream needs a wordlist file, not the embedded list"),
        ("embedded", false) => search(&config, &WordList::embedded(), cli.quiet),
        (path, true) => search(&config, &FileDictionary::new(path), cli.quiet),
        (path, false) => {
            let words = WordList::load_from_file(path)
                .with_context(|| format!("could not load wordlist '{path}'"))?;
            search(&config, &words, cli.quiet)
        }
    }
}

fn search<D: Dictionary>(config: &LadderConfig, dictionary: &D, quiet: bool) -> Result<ExitCode> {
    println!(
        "Searching for a ladder from {} to {} ({})",
        config.start.bright_yellow().bold(),
        config.goal.bright_yellow().bold(),
        config.strategy
    );

    let mut reporter = if quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::verbose()
    };

    let report = run_ladder(config, dictionary, &mut reporter).context("search failed")?;
    reporter.finish();

    print_ladder_report(&report, &config.goal);

    Ok(if report.outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn two_words_parse() {
        let cli = Cli::try_parse_from(["word_ladder", "cat", "dog"]).unwrap();

        assert_eq!(cli.start, "cat");
        assert_eq!(cli.end, "dog");
        assert_eq!(cli.strategy, "explore");
        assert_eq!(cli.wordlist, "embedded");
        assert_eq!(cli.max_relaxation, DEFAULT_MAX_RELAXATION);
        assert!(!cli.stream);
        assert!(!cli.quiet);
    }

    #[test]
    fn wrong_word_count_is_a_usage_error() {
        for args in [
            &["word_ladder"][..],
            &["word_ladder", "cat"][..],
            &["word_ladder", "cat", "cot", "dog"][..],
        ] {
            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.exit_code(), 2, "args {args:?}");
        }
    }

    #[test]
    fn options_parse() {
        let cli = Cli::try_parse_from([
            "word_ladder",
            "-s",
            "greedy",
            "-w",
            "words.txt",
            "--stream",
            "-r",
            "4",
            "-q",
            "cold",
            "warm",
        ])
        .unwrap();

        assert_eq!(cli.strategy, "greedy");
        assert_eq!(cli.wordlist, "words.txt");
        assert!(cli.stream);
        assert_eq!(cli.max_relaxation, 4);
        assert!(cli.quiet);
    }
}
