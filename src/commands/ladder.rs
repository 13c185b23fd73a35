//! Ladder search command
//!
//! Validates the two input words against the dictionary, runs the chosen
//! strategy and reports how the search ended.

use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::solver::{
    DEFAULT_MAX_RELAXATION, ExploreOutcome, ExploreStats, Explorer, SearchObserver, StrategyKind,
    TrailBuilder, TrailOutcome,
};
use std::time::{Duration, Instant};

/// Configuration for one ladder search
#[derive(Debug, Clone)]
pub struct LadderConfig {
    pub start: String,
    pub goal: String,
    pub strategy: StrategyKind,
    pub max_relaxation: usize,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self {
            start,
            goal,
            strategy: StrategyKind::Explore,
            max_relaxation: DEFAULT_MAX_RELAXATION,
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_max_relaxation(mut self, max_relaxation: usize) -> Self {
        self.max_relaxation = max_relaxation;
        self
    }
}

/// How a ladder search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderOutcome {
    /// A ladder from start to goal, both included
    Found(Vec<Word>),
    /// Depth-first exploration ran out of words without reaching the goal
    Exhausted,
    /// The greedy trail could not move; holds the partial trail
    Stalled(Vec<Word>),
    /// An input word is not in the dictionary; no search was run
    InvalidWord(String),
}

impl LadderOutcome {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Result of a ladder search
#[derive(Debug, Clone)]
pub struct LadderReport {
    pub strategy: StrategyKind,
    pub outcome: LadderOutcome,
    /// Exploration counters; `None` unless the depth-first explorer ran
    pub stats: Option<ExploreStats>,
    pub duration: Duration,
}

/// Check that an input word is a dictionary entry
///
/// Returns the word if it is valid, `None` otherwise.
///
/// # Errors
///
/// Returns `DictionaryError` if the dictionary cannot be read.
pub fn validate_word<D: Dictionary>(
    dictionary: &D,
    text: &str,
) -> Result<Option<Word>, DictionaryError> {
    let Ok(word) = Word::new(text) else {
        return Ok(None);
    };

    if dictionary.contains(word.text())? {
        Ok(Some(word))
    } else {
        Ok(None)
    }
}

/// Find a ladder between the configured words
///
/// Both words are validated before any search starts; the first invalid one
/// is reported as `LadderOutcome::InvalidWord`.
///
/// # Errors
///
/// Returns `DictionaryError` if the dictionary cannot be read.
///
/// # Examples
/// ```
/// use word_ladder::commands::{LadderConfig, LadderOutcome, run_ladder};
/// use word_ladder::dictionary::WordList;
/// use word_ladder::solver::SilentObserver;
///
/// let dict = WordList::from_slice(&["cat", "bat"]);
/// let config = LadderConfig::new("cat".to_string(), "bat".to_string());
///
/// let report = run_ladder(&config, &dict, &mut SilentObserver).unwrap();
/// assert!(report.outcome.is_found());
/// ```
pub fn run_ladder<D: Dictionary, O: SearchObserver>(
    config: &LadderConfig,
    dictionary: &D,
    observer: &mut O,
) -> Result<LadderReport, DictionaryError> {
    let start_time = Instant::now();
    let report = |outcome, stats| LadderReport {
        strategy: config.strategy,
        outcome,
        stats,
        duration: start_time.elapsed(),
    };

    let Some(start) = validate_word(dictionary, &config.start)? else {
        return Ok(report(LadderOutcome::InvalidWord(config.start.clone()), None));
    };
    let Some(goal) = validate_word(dictionary, &config.goal)? else {
        return Ok(report(LadderOutcome::InvalidWord(config.goal.clone()), None));
    };

    match config.strategy {
        StrategyKind::Explore => {
            let mut explorer = Explorer::new(dictionary, start, goal);
            let outcome = match explorer.run(observer)? {
                ExploreOutcome::Found(path) => LadderOutcome::Found(path),
                ExploreOutcome::Exhausted => LadderOutcome::Exhausted,
            };
            Ok(report(outcome, Some(explorer.stats())))
        }
        StrategyKind::Greedy => {
            let builder = TrailBuilder::new(dictionary).with_max_relaxation(config.max_relaxation);
            let outcome = match builder.build(start, &goal, observer)? {
                TrailOutcome::Converged(trail) => LadderOutcome::Found(trail),
                TrailOutcome::Stalled(trail) => LadderOutcome::Stalled(trail),
            };
            Ok(report(outcome, None))
        }
    }
}
