//! fibgold - Fibonacci sequence explorer
//!
//! Generates the Fibonacci sequence with arbitrary-precision terms, derives
//! the ratios of consecutive terms and charts both against the golden ratio.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod common;
pub mod sequence;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::{generate, ratios, Sequence, GOLDEN_RATIO};
