//! Console observer for running searches

use super::display::{print_progress, print_trail_step};
use super::formatters::tree_steps;
use crate::core::Word;
use crate::solver::{ExploreStats, NodeId, SearchObserver, SearchTree};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints search events to the terminal
///
/// Verbose mode prints a full progress block before every visit. Quiet mode
/// folds the counters into a single spinner line.
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn verbose() -> Self {
        Self { spinner: None }
    }

    #[must_use]
    pub fn quiet() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            spinner: Some(spinner),
        }
    }

    /// Remove the spinner line, if any
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl SearchObserver for ConsoleReporter {
    fn on_visit(&mut self, stats: &ExploreStats, tree: &SearchTree, node: NodeId) {
        match &self.spinner {
            Some(spinner) => spinner.set_message(format!(
                "{} nodes | {} dead ends | {} skipped | at {}",
                stats.nodes_processed,
                stats.dead_ends,
                stats.dead_ends_skipped,
                tree.node(node).word()
            )),
            None => print_progress(stats, &tree_steps(tree, node)),
        }
    }

    fn on_trail_step(&mut self, word: &Word, trail: &[Word]) {
        match &self.spinner {
            Some(spinner) => spinner.set_message(format!("{} steps | at {word}", trail.len())),
            None => print_trail_step(word, trail.len()),
        }
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
