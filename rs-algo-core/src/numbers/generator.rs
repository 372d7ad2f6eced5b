use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

/// Draws `count` integers uniformly from `range` (bounds included).
///
/// # Errors
/// Returns an error if `range` is empty.
pub fn random_samples<R: Rng + ?Sized>(
	rng: &mut R,
	count: usize,
	range: RangeInclusive<i32>,
) -> Result<Vec<i32>, String> {
	if range.is_empty() {
		return Err(format!(
			"Empty range {}..={}",
			range.start(),
			range.end()
		));
	}
	Ok((0..count).map(|_| rng.random_range(range.clone())).collect())
}

/// Shuffles every element except the first and the last one.
///
/// Slices shorter than 3 elements are left untouched.
pub fn shuffle_inner<R: Rng + ?Sized>(rng: &mut R, values: &mut [i32]) {
	if values.len() < 3 {
		return;
	}
	let last = values.len() - 1;
	values[1..last].shuffle(rng);
}
