//! Word ladder search algorithms
//!
//! This module contains the word graph traversal and its two strategies.

mod dead_ends;
pub mod explorer;
pub mod greedy;
mod neighbors;
mod observer;
pub mod strategy;
pub mod tree;

pub use dead_ends::DeadEnds;
pub use explorer::{ExploreOutcome, Explorer};
pub use greedy::{DEFAULT_MAX_RELAXATION, TrailBuilder, TrailOutcome};
pub use neighbors::neighbors;
pub use observer::{ExploreStats, SearchObserver, SilentObserver};
pub use strategy::StrategyKind;
pub use tree::{NodeId, SearchNode, SearchTree};
