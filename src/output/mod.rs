//! Output formatting for test results.
//!
//! This module provides formatters for displaying result records in
//! different formats:
//! - Terminal: Human-readable output with colors
//! - JSON: Machine-readable serialization
//!
//! Formatters only build strings; the core never prints, draws, or writes.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_hybrid_result, format_result};
