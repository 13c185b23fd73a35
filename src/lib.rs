//! Word Ladder
//!
//! Finds chains of dictionary words where each step changes exactly one
//! character position, using either a memoized depth-first search or a greedy
//! hill climb.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::commands::{LadderConfig, LadderOutcome, run_ladder};
//! use word_ladder::dictionary::WordList;
//! use word_ladder::solver::SilentObserver;
//!
//! let dict = WordList::from_slice(&["cat", "cot", "cog", "dog"]);
//! let config = LadderConfig::new("cat".to_string(), "dog".to_string());
//!
//! let report = run_ladder(&config, &dict, &mut SilentObserver).unwrap();
//! if let LadderOutcome::Found(path) = report.outcome {
//!     assert_eq!(path.len(), 4);
//! }
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
