//! Formatting utilities for terminal output

use crate::core::{Word, distance};
use crate::solver::{NodeId, SearchTree};

/// Paths longer than this are abridged in progress output
pub const ABRIDGE_AFTER: usize = 10;

/// Steps shown at each end of an abridged path
const ABRIDGED_EDGE: usize = 5;

/// Format one ladder step as `word - distance`
#[must_use]
pub fn format_step(word: &str, distance_to_goal: usize) -> String {
    format!("{word} - {distance_to_goal}")
}

/// Render a path as indented lines, one per step
///
/// When `abridged` is set and the path has more than `ABRIDGE_AFTER` steps,
/// only the first and last five are shown around an ellipsis line.
#[must_use]
pub fn render_path(steps: &[(&str, usize)], abridged: bool) -> Vec<String> {
    let line = |&(word, dist): &(&str, usize)| format!("\t{}", format_step(word, dist));

    if abridged && steps.len() > ABRIDGE_AFTER {
        let head = steps[..ABRIDGED_EDGE].iter().map(line);
        let tail = steps[steps.len() - ABRIDGED_EDGE..].iter().map(line);
        head.chain(std::iter::once("\t...".to_string()))
            .chain(tail)
            .collect()
    } else {
        steps.iter().map(line).collect()
    }
}

/// Steps from the root to `node`, each with its stored distance to the goal
#[must_use]
pub fn tree_steps(tree: &SearchTree, node: NodeId) -> Vec<(&str, usize)> {
    tree.path(node)
        .into_iter()
        .map(|id| {
            let step = tree.node(id);
            (step.word().text(), step.distance_to_goal())
        })
        .collect()
}

/// Steps of a finished ladder, with distances measured against `goal`
#[must_use]
pub fn ladder_steps<'w>(path: &'w [Word], goal: &str) -> Vec<(&'w str, usize)> {
    path.iter()
        .map(|word| (word.text(), distance(word.text(), goal)))
        .collect()
}

/// Headline for a greedy trail that could not reach the goal
///
/// The trail includes its start word, so a trail of one word took no steps.
#[must_use]
pub fn stall_message(trail: &[Word]) -> String {
    let steps = trail.len().saturating_sub(1);
    let unit = if steps == 1 { "step" } else { "steps" };
    format!("Greedy search stalled after {steps} {unit}")
}
