//! Numeric sequence exercises.
//!
//! Small building blocks over `i32` slices:
//! - Random generation and partial shuffling (`generator`)
//! - Reductions and searches (`stats`)
//! - Sorting, filtering and formatting (`sequence`)

/// Random sample generation and shuffling.
///
/// Every function takes the random generator as a parameter so that
/// callers can seed it.
pub mod generator;

/// Reductions over integer slices (max, sum, counts, factorial).
pub mod stats;

/// Sorting, filtering and comma separated formatting.
pub mod sequence;

pub use generator::{random_samples, shuffle_inner};
pub use sequence::{odd_values, remove_odd, sort_descending, sorted_copy, to_csv};
pub use stats::{count_odd, factorial, first_greater, max_with_index, normalize_by_max, sum};
