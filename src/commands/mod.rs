//! Command implementations

pub mod ladder;

pub use ladder::{LadderConfig, LadderOutcome, LadderReport, run_ladder, validate_word};
