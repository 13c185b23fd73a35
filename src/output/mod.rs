//! Terminal output formatting
//!
//! Display utilities for search progress and results.

pub mod display;
pub mod formatters;
pub mod reporter;

pub use display::{print_ladder_report, print_path};
pub use reporter::ConsoleReporter;
