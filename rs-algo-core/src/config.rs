use std::ops::RangeInclusive;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Parameters of an exercise run.
///
/// `Default` holds the values of the classic exercise. Fields are public
/// so that callers (tests mostly) can override a few of them.
///
/// # Invariants (checked by `validate`)
/// - `sample_size > 0`
/// - `min_value <= max_value`
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseConfig {
	/// Number of random integers to generate.
	pub sample_size: usize,

	/// Lower bound of the random integers (included).
	pub min_value: i32,

	/// Upper bound of the random integers (included).
	pub max_value: i32,

	/// Threshold of the upper-bound search on the sorted samples.
	pub threshold: i32,

	/// `n` of the factorial step.
	pub factorial_of: u32,

	/// Word list used by the word and file statistics steps.
	pub words_path: PathBuf,

	/// Second word list, for the common words step.
	pub second_words_path: PathBuf,

	/// Destination of the comma separated even samples.
	pub output_path: PathBuf,

	/// Fixed seed for reproducible runs, a random one otherwise.
	pub seed: Option<u64>,
}

impl Default for ExerciseConfig {
	fn default() -> Self {
		Self {
			sample_size: 10,
			min_value: 0,
			max_value: 1000,
			threshold: 455,
			factorial_of: 6,
			words_path: PathBuf::from("words.txt"),
			second_words_path: PathBuf::from("words2.txt"),
			output_path: PathBuf::from("vec.txt"),
			seed: None,
		}
	}
}

impl ExerciseConfig {
	/// Checks the invariants.
	pub fn validate(&self) -> Result<(), String> {
		if self.sample_size == 0 {
			return Err("sample_size must be > 0".to_owned());
		}
		if self.min_value > self.max_value {
			return Err(format!(
				"min_value ({}) must be <= max_value ({})",
				self.min_value, self.max_value
			));
		}
		Ok(())
	}

	/// Range of the random integers.
	pub fn range(&self) -> RangeInclusive<i32> {
		self.min_value..=self.max_value
	}

	/// Creates the random generator, seeded if `seed` is set.
	pub fn make_rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	#[test]
	fn test_defaults() {
		let config = ExerciseConfig::default();
		assert_eq!(config.sample_size, 10);
		assert_eq!(config.range(), 0..=1000);
		assert_eq!(config.threshold, 455);
		assert_eq!(config.factorial_of, 6);
		assert_eq!(config.words_path, PathBuf::from("words.txt"));
		assert_eq!(config.second_words_path, PathBuf::from("words2.txt"));
		assert_eq!(config.output_path, PathBuf::from("vec.txt"));
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_invalid_values_are_rejected() {
		let empty = ExerciseConfig { sample_size: 0, ..ExerciseConfig::default() };
		assert!(empty.validate().is_err());

		let reversed = ExerciseConfig { min_value: 5, max_value: 1, ..ExerciseConfig::default() };
		assert!(reversed.validate().is_err());

		let single = ExerciseConfig { min_value: 3, max_value: 3, ..ExerciseConfig::default() };
		assert!(single.validate().is_ok());
		assert_eq!(single.range(), 3..=3);
	}

	#[test]
	fn test_seeded_rng_is_reproducible() {
		let config = ExerciseConfig { seed: Some(99), ..ExerciseConfig::default() };
		let a: u64 = config.make_rng().random();
		let b: u64 = config.make_rng().random();
		assert_eq!(a, b);
	}
}
