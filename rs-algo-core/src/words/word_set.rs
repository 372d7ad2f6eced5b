use std::cmp::Ordering;

use super::normalizer::{is_normalized, normalize_word};

/// A sorted, duplicate-free collection of normalized words.
///
/// The `WordSet` is built in one pass from a token sequence and is never
/// mutated afterward. It also remembers how many tokens it was built
/// from, since "tokens read" and "distinct words" are reported separately.
///
/// # Invariants
/// - `words` is strictly increasing (ordinal string comparison)
/// - Every element of `words` is a normalized word (it may be empty)
/// - `total_tokens >= words.len()`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
	/// Distinct normalized words in ascending order
	words: Vec<String>,

	/// Number of tokens seen before deduplication
	total_tokens: usize,
}

impl WordSet {
	/// Builds a set from a sequence of raw tokens.
	///
	/// Each token is normalized, then the words are sorted and consecutive
	/// duplicates collapsed (the first occurrence is kept).
	///
	/// # Notes
	/// - A token without any letter becomes the empty word, it is kept.
	/// - An empty sequence yields an empty set with a total of 0.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut words: Vec<String> = tokens
			.into_iter()
			.map(|token| normalize_word(token.as_ref()))
			.collect();
		let total_tokens = words.len();

		words.sort();
		words.dedup();

		debug_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
		debug_assert!(words.iter().all(|word| is_normalized(word)));

		Self { words, total_tokens }
	}

	/// Builds a set from raw text, splitting on any whitespace.
	pub fn from_text(text: &str) -> Self {
		Self::from_tokens(text.split_whitespace())
	}

	/// Distinct words, ascending.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns `true` if no word was read.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Number of tokens the set was built from, duplicates included.
	pub fn total_tokens(&self) -> usize {
		self.total_tokens
	}

	/// Checks membership with a binary search.
	///
	/// `word` is compared as is, it is not normalized first.
	pub fn contains(&self, word: &str) -> bool {
		self.words
			.binary_search_by(|probe| probe.as_str().cmp(word))
			.is_ok()
	}

	/// Iterates over the words in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	/// Returns the words present in both sets, ascending and without duplicates.
	///
	/// Walks both sorted sequences with one cursor each:
	/// - equal words are emitted and both cursors advance
	/// - otherwise only the cursor on the lesser word advances
	///
	/// Runs in `O(self.len() + other.len())`.
	pub fn intersection<'a>(&'a self, other: &'a WordSet) -> Vec<&'a str> {
		let mut common = Vec::new();
		let (mut i, mut j) = (0, 0);

		while i < self.words.len() && j < other.words.len() {
			match self.words[i].cmp(&other.words[j]) {
				Ordering::Less => i += 1,
				Ordering::Greater => j += 1,
				Ordering::Equal => {
					common.push(self.words[i].as_str());
					i += 1;
					j += 1;
				}
			}
		}

		common
	}
}

impl<'a> IntoIterator for &'a WordSet {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.words.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn assert_strictly_sorted(set: &WordSet) {
		assert!(
			set.words().windows(2).all(|pair| pair[0] < pair[1]),
			"not strictly sorted: {:?}",
			set.words()
		);
	}

	#[test]
	fn test_hello_world_scenario() {
		let set = WordSet::from_tokens(["Hello,", "world!", "HELLO"]);
		assert_eq!(set.words(), ["hello", "world"]);
		assert_eq!(set.total_tokens(), 3);
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_empty_input() {
		let set = WordSet::from_tokens(Vec::<String>::new());
		assert!(set.is_empty());
		assert_eq!(set.total_tokens(), 0);

		assert_eq!(WordSet::from_text("  \n\t "), WordSet::default());
	}

	#[test]
	fn test_tokens_without_letters_become_empty_word() {
		let set = WordSet::from_text("42 apple -- 7");
		assert_eq!(set.words(), ["", "apple"]);
		assert_eq!(set.total_tokens(), 4);
	}

	#[test]
	fn test_sorted_and_deduplicated() {
		let text = "The quick brown fox jumps over the lazy dog. THE DOG sleeps; the fox runs!";
		let set = WordSet::from_text(text);
		assert_strictly_sorted(&set);
		assert_eq!(set.total_tokens(), 15);

		// Same distinct elements as the unsorted normalized input
		let expected: HashSet<String> = text.split_whitespace().map(normalize_word).collect();
		let actual: HashSet<String> = set.words().iter().cloned().collect();
		assert_eq!(actual, expected);
	}

	#[test]
	fn test_ordinal_order() {
		let set = WordSet::from_tokens(["b", "ab", "a", "aa", "ba"]);
		assert_eq!(set.words(), ["a", "aa", "ab", "b", "ba"]);
	}

	#[test]
	fn test_contains() {
		let set = WordSet::from_tokens(["Cat", "dog", "fish"]);
		assert!(set.contains("cat"));
		assert!(set.contains("fish"));
		assert!(!set.contains("Cat"));
		assert!(!set.contains("zebra"));
	}

	#[test]
	fn test_iteration() {
		let set = WordSet::from_tokens(["b", "a", "b"]);
		assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);

		let mut seen = Vec::new();
		for word in &set {
			seen.push(word.clone());
		}
		assert_eq!(seen, vec!["a", "b"]);
	}

	#[test]
	fn test_intersection_scenario() {
		let a = WordSet::from_tokens(["cat", "dog", "fish"]);
		let b = WordSet::from_tokens(["dog", "fish", "zebra"]);
		assert_eq!(a.intersection(&b), vec!["dog", "fish"]);
	}

	#[test]
	fn test_intersection_is_commutative_and_a_subset() {
		let a = WordSet::from_text("Apples, pears & plums; apples again. Kiwi!");
		let b = WordSet::from_text("kiwi PLUMS cherries apples apples");

		let ab = a.intersection(&b);
		let ba = b.intersection(&a);
		assert_eq!(ab, ba);
		assert_eq!(ab, vec!["apples", "kiwi", "plums"]);

		for word in &ab {
			assert!(a.contains(word));
			assert!(b.contains(word));
		}
	}

	#[test]
	fn test_intersection_empty_or_disjoint() {
		let empty = WordSet::default();
		let a = WordSet::from_tokens(["one", "two"]);
		let b = WordSet::from_tokens(["three", "four"]);

		assert!(a.intersection(&empty).is_empty());
		assert!(empty.intersection(&a).is_empty());
		assert!(a.intersection(&b).is_empty());
	}

	#[test]
	fn test_intersection_with_itself() {
		let a = WordSet::from_tokens(["x", "y", "z", "y"]);
		assert_eq!(a.intersection(&a), vec!["x", "y", "z"]);
	}

	#[test]
	fn test_replacement_and_non_ascii_tokens() {
		let set = WordSet::from_tokens(["Caf\u{FFFD}", "\u{FFFD}", "ÉTÉ", "caf"]);
		assert_eq!(set.words(), ["", "caf", "t"]);
		assert_eq!(set.total_tokens(), 4);
		assert!(set.iter().all(is_normalized));
	}
}
