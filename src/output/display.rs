//! Display functions for search progress and results

use super::formatters::{ladder_steps, render_path, stall_message};
use crate::commands::{LadderOutcome, LadderReport};
use crate::core::Word;
use crate::solver::ExploreStats;
use colored::Colorize;

/// Print the counters and current path before a node visit
pub fn print_progress(stats: &ExploreStats, steps: &[(&str, usize)]) {
    println!("{}", "-".repeat(35).bright_black());
    println!("Nodes Processed: {}", stats.nodes_processed);
    println!("Dead Ends: {}", stats.dead_ends);
    println!("Dead Ends Skipped: {}", stats.dead_ends_skipped);
    print_path(steps, true);
}

/// Print a path with its step count header
pub fn print_path(steps: &[(&str, usize)], abridged: bool) {
    println!("Printing Path ({} steps)", steps.len());
    for line in render_path(steps, abridged) {
        println!("{line}");
    }
}

/// Print a word accepted by the greedy builder
pub fn print_trail_step(word: &Word, trail_len: usize) {
    println!("  {} {}", format!("{trail_len:>3}.").bright_black(), word.text().bright_white());
}

/// Print the final result of a ladder search
///
/// Invalid input goes to stderr; everything else to stdout.
pub fn print_ladder_report(report: &LadderReport, goal: &str) {
    match &report.outcome {
        LadderOutcome::Found(path) => {
            println!("\n{}", "SUCCESS!".green().bold());
            print_path(&ladder_steps(path, goal), false);
        }
        LadderOutcome::Exhausted => {
            println!(
                "\n{}",
                format!("No ladder exists to '{goal}': every reachable word is a dead end")
                    .red()
                    .bold()
            );
        }
        LadderOutcome::Stalled(trail) => {
            println!("\n{}", stall_message(trail).yellow().bold());
            print_path(&ladder_steps(trail, goal), false);
        }
        LadderOutcome::InvalidWord(word) => {
            eprintln!(
                "{}",
                format!("input word '{word}' is not a valid word").red()
            );
            return;
        }
    }

    if let Some(stats) = report.stats {
        println!(
            "\n{} nodes processed, {} dead ends, {} dead ends skipped",
            stats.nodes_processed.to_string().bright_cyan(),
            stats.dead_ends.to_string().bright_cyan(),
            stats.dead_ends_skipped.to_string().bright_cyan()
        );
    }
    println!(
        "Strategy: {} | Time taken: {:.2}s",
        report.strategy,
        report.duration.as_secs_f64()
    );
}
