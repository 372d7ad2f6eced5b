//! Standard sequence algorithms, exercised end to end.
//!
//! This crate provides:
//! - Word normalization, deduplication and intersection
//! - Numeric exercises over random samples (reductions, sorting, filtering)
//! - Optional file sources and a comma separated writer
//! - A runner executing every exercise in order
//!
//! Input files are optional: a step whose source cannot be read is skipped.

/// Word normalizer and sorted, duplicate-free word sets.
pub mod words;

/// Numeric building blocks over integer slices.
pub mod numbers;

/// File I/O (optional sources, token reading, statistics, CSV output).
pub mod io;

/// Run parameters and their defaults.
pub mod config;

/// Exercise runner writing its results to any `Write` sink.
pub mod exercise;
