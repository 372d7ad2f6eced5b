/// Normalizes a raw token into a word.
///
/// - Keeps ASCII letters only, digits and punctuation are dropped
/// - Lowercases what remains
///
/// The result may be empty (ex. `"1984"` or `"--"`), this is never an error.
/// Non ASCII letters are dropped as well.
pub fn normalize_word(token: &str) -> String {
	token
		.chars()
		.filter(char::is_ascii_alphabetic)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Returns `true` if `word` is already in normalized form.
pub(crate) fn is_normalized(word: &str) -> bool {
	word.chars().all(|c| c.is_ascii_lowercase())
}
