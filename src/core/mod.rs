//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and has clear mathematical properties.

mod distance;
mod word;

pub use distance::{distance, is_neighbor};
pub use word::{Word, WordError};
