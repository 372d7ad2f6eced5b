//! Word normalization and deduplication.
//!
//! This module provides:
//! - Token normalization to lowercase ASCII letters (`normalize_word`)
//! - Sorted, duplicate-free word collections (`WordSet`)
//! - Merge-based intersection of two word sets

/// Token normalization.
///
/// Drops every non alphabetic character and lowercases the rest.
pub mod normalizer;

/// Sorted, duplicate-free set of normalized words.
///
/// Built once from a token sequence, read-only afterward.
pub mod word_set;

pub use normalizer::normalize_word;
pub use word_set::WordSet;
