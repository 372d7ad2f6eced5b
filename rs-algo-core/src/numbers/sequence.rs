/// Returns an ascending copy, the input is left as is.
pub fn sorted_copy(values: &[i32]) -> Vec<i32> {
	let mut sorted = values.to_vec();
	sorted.sort_unstable();
	sorted
}

/// Collects the odd values, keeping their order.
pub fn odd_values(values: &[i32]) -> Vec<i32> {
	values.iter().copied().filter(|v| v % 2 != 0).collect()
}

/// Sorts in place, largest first.
pub fn sort_descending(values: &mut [i32]) {
	values.sort_unstable_by(|a, b| b.cmp(a));
}

/// Removes the odd values in place, keeping the order of the others.
pub fn remove_odd(values: &mut Vec<i32>) {
	values.retain(|v| v % 2 == 0);
}

/// Formats values as a comma separated list.
///
/// Example: `[1, 3, 5]` → `"1,3,5"`, `[]` → `""`.
pub fn to_csv(values: &[i32]) -> String {
	values
		.iter()
		.map(i32::to_string)
		.collect::<Vec<_>>()
		.join(",")
}
