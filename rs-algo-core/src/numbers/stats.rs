/// Returns the index and value of the largest element.
///
/// On ties the first occurrence wins. Returns `None` for an empty slice.
pub fn max_with_index(values: &[i32]) -> Option<(usize, i32)> {
	values
		.iter()
		.copied()
		.enumerate()
		.fold(None, |best, (index, value)| match best {
			Some((_, max)) if max >= value => best,
			_ => Some((index, value)),
		})
}

/// Sums the values into an `i64` so that large inputs cannot overflow.
pub fn sum(values: &[i32]) -> i64 {
	values.iter().map(|&v| i64::from(v)).sum()
}

/// Counts the odd values (negative ones included).
pub fn count_odd(values: &[i32]) -> usize {
	values.iter().filter(|&&v| v % 2 != 0).count()
}

/// Divides every value by the maximum value.
///
/// Returns `None` for an empty slice or when the maximum is `0`.
pub fn normalize_by_max(values: &[i32]) -> Option<Vec<f64>> {
	let (_, max) = max_with_index(values)?;
	if max == 0 {
		return None;
	}
	let max = f64::from(max);
	Some(values.iter().map(|&v| f64::from(v) / max).collect())
}

/// Upper-bound search on an ascending slice.
///
/// Returns the first value strictly greater than `threshold` (if any)
/// and how many values are greater than `threshold`.
///
/// # Notes
/// - `sorted` must be in ascending order, otherwise the result is meaningless.
pub fn first_greater(sorted: &[i32], threshold: i32) -> (Option<i32>, usize) {
	let bound = sorted.partition_point(|&v| v <= threshold);
	(sorted.get(bound).copied(), sorted.len() - bound)
}

/// Computes `n!`.
///
/// Returns `None` if the result does not fit in an `u64` (`n > 20`).
pub fn factorial(n: u32) -> Option<u64> {
	(1..=u64::from(n)).try_fold(1u64, |acc, x| acc.checked_mul(x))
}
