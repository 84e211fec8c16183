// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - too_many_lines: The line-transition logic is clearer as one cohesive function
// - module_name_repetitions: Segmenter lives in segment/, that's fine
// - option_if_let_else: if-let is often clearer
// - single_match_else: match is clearer than if-let for pattern matching
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::single_match_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod segment;
