//! Greedy trail builder
//!
//! Hill-climbs toward the goal one word at a time. At each step it asks for a
//! neighbor exactly one closer to the goal; failing that it relaxes the target
//! (same distance, then one further) before giving up. Accepted words are
//! never taken back.

use super::neighbors::neighbors;
use super::observer::SearchObserver;
use crate::core::{Word, distance};
use crate::dictionary::{Dictionary, DictionaryError};
use rustc_hash::FxHashSet;

/// Default number of times the target distance may be relaxed per step
///
/// A one-letter change moves the distance to the goal by at most one, so two
/// relaxations already cover every neighbor.
pub const DEFAULT_MAX_RELAXATION: usize = 2;

/// How a trail build ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailOutcome {
    /// The trail reached the goal
    Converged(Vec<Word>),
    /// No unused neighbor met any allowed target; the partial trail is kept
    Stalled(Vec<Word>),
}

impl TrailOutcome {
    /// The trail as built, whether or not it reached the goal
    #[must_use]
    pub fn trail(&self) -> &[Word] {
        match self {
            Self::Converged(trail) | Self::Stalled(trail) => trail,
        }
    }
}

/// Greedy builder with bounded threshold relaxation
pub struct TrailBuilder<'d, D: Dictionary> {
    dictionary: &'d D,
    max_relaxation: usize,
}

impl<'d, D: Dictionary> TrailBuilder<'d, D> {
    /// Create a builder with the default relaxation bound
    #[must_use]
    pub const fn new(dictionary: &'d D) -> Self {
        Self {
            dictionary,
            max_relaxation: DEFAULT_MAX_RELAXATION,
        }
    }

    /// Set how many times the target distance may be relaxed per step
    #[must_use]
    pub const fn with_max_relaxation(mut self, max_relaxation: usize) -> Self {
        self.max_relaxation = max_relaxation;
        self
    }

    #[must_use]
    pub const fn max_relaxation(&self) -> usize {
        self.max_relaxation
    }

    /// Extend a trail from `start` until it reaches `finish` or stalls
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if a neighbor scan fails.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::dictionary::WordList;
    /// use word_ladder::solver::{SilentObserver, TrailBuilder, TrailOutcome};
    ///
    /// let dict = WordList::from_slice(&["cat", "cot", "cog", "dog"]);
    /// let start = Word::new("cat").unwrap();
    /// let finish = Word::new("dog").unwrap();
    ///
    /// let outcome = TrailBuilder::new(&dict)
    ///     .build(start, &finish, &mut SilentObserver)
    ///     .unwrap();
    /// assert!(matches!(outcome, TrailOutcome::Converged(_)));
    /// assert_eq!(outcome.trail().len(), 4);
    /// ```
    pub fn build<O: SearchObserver>(
        &self,
        start: Word,
        finish: &Word,
        observer: &mut O,
    ) -> Result<TrailOutcome, DictionaryError> {
        let mut used: FxHashSet<Word> = FxHashSet::default();
        used.insert(start.clone());
        let mut trail = vec![start.clone()];
        let mut current = start;

        while distance(current.text(), finish.text()) > 0 {
            let Some(next) = self.find_next(&current, finish, &used)? else {
                return Ok(TrailOutcome::Stalled(trail));
            };

            used.insert(next.clone());
            trail.push(next.clone());
            observer.on_trail_step(&next, &trail);
            current = next;
        }

        Ok(TrailOutcome::Converged(trail))
    }

    /// Pick the next word after `current`, or `None` if every target fails
    ///
    /// Targets run from one closer than `current` up through
    /// `max_relaxation` relaxations. Within a target the last matching word in
    /// dictionary order wins.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the neighbor scan fails.
    pub fn find_next(
        &self,
        current: &Word,
        finish: &Word,
        used: &FxHashSet<Word>,
    ) -> Result<Option<Word>, DictionaryError> {
        let candidates = neighbors(self.dictionary, current.text(), |w| used.contains(w))?;
        let current_distance = distance(current.text(), finish.text());
        let first_target = current_distance.saturating_sub(1);
        // One step moves the distance by at most one, so no neighbor lies past this
        let last_target = first_target
            .saturating_add(self.max_relaxation)
            .min(current_distance + 1);

        let chosen = (first_target..=last_target)
            .find_map(|target| select_candidate(&candidates, finish.text(), target));

        Ok(chosen.cloned())
    }
}

/// Last candidate in scan order whose distance to `finish` equals `target`
fn select_candidate<'c>(candidates: &'c [Word], finish: &str, target: usize) -> Option<&'c Word> {
    candidates
        .iter()
        .rev()
        .find(|candidate| distance(candidate.text(), finish) == target)
}
