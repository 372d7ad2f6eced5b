use std::fmt::Display;
use std::io::{self, Write};

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::ExerciseConfig;
use crate::io::{FileStats, read_bytes, read_tokens, write_csv};
use crate::numbers;
use crate::words::WordSet;

/// Runs the numbered exercises and reports each result on an output sink.
///
/// # Responsibilities
/// - Steps 1 to 13: random samples, reductions, sorting, filtering,
///   shuffling and the comma separated output file
/// - Steps 14 to 18: word lists and file statistics (skipped when the
///   word files are unavailable)
/// - Step 19: factorial
///
/// Each `run_*` method also returns what it computed, `None` meaning the
/// step was skipped.
pub struct Exercises<R: Rng> {
	config: ExerciseConfig,
	rng: R,
}

impl Exercises<StdRng> {
	/// Creates a runner whose generator follows `config.seed`.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn new(config: ExerciseConfig) -> Result<Self, String> {
		let rng = config.make_rng();
		Self::with_rng(config, rng)
	}
}

impl<R: Rng> Exercises<R> {
	/// Creates a runner with a caller supplied random generator.
	///
	/// # Errors
	/// Returns an error if the configuration is invalid.
	pub fn with_rng(config: ExerciseConfig, rng: R) -> Result<Self, String> {
		config.validate()?;
		Ok(Self { config, rng })
	}

	pub fn config(&self) -> &ExerciseConfig {
		&self.config
	}

	/// Runs every exercise in order.
	///
	/// # Errors
	/// Only failures to write to `out` are reported.
	/// Unavailable word files or an unwritable output file skip their step.
	pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
		self.run_numbers(out)?;
		self.run_word_list(out)?;
		self.run_file_stats(out)?;
		self.run_common_words(out)?;
		self.run_factorial(out)?;
		Ok(())
	}

	/// Steps 1 to 13.
	///
	/// Returns the even samples meant for `config.output_path`.
	/// Failing to write that file skips the write only.
	pub fn run_numbers<W: Write>(&mut self, out: &mut W) -> io::Result<Vec<i32>> {
		info!("running numeric exercises on {} samples", self.config.sample_size);

		// 1. & 2.
		let mut values = numbers::random_samples(&mut self.rng, self.config.sample_size, self.config.range())
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
		write_list(out, "Samples", &values)?;

		// 3. & 4.
		if let Some((index, max)) = numbers::max_with_index(&values) {
			writeln!(out, "Max element: {max}")?;
			writeln!(out, "Index of the max element: {index}")?;
		}

		// 5. & 6.
		writeln!(out, "Sum of the elements: {}", numbers::sum(&values))?;
		writeln!(out, "Number of odd elements: {}", numbers::count_odd(&values))?;

		// 7.
		match numbers::normalize_by_max(&values) {
			Some(normalized) => {
				let rendered: Vec<String> = normalized.iter().map(|v| format!("{v:.3}")).collect();
				write_list(out, "Normalized", &rendered)?;
			}
			None => writeln!(out, "Normalized: not defined, the max element is 0")?,
		}

		// 8.
		let sorted = numbers::sorted_copy(&values);
		write_list(out, "Sorted", &sorted)?;
		let threshold = self.config.threshold;
		match numbers::first_greater(&sorted, threshold) {
			(Some(first), count) => {
				writeln!(out, "First element greater than {threshold}: {first} ({count} elements greater)")?;
			}
			(None, _) => writeln!(out, "No element greater than {threshold}")?,
		}

		// 9.
		write_list(out, "Odd elements", &numbers::odd_values(&values))?;

		// 10.
		numbers::sort_descending(&mut values);
		write_list(out, "Sorted in descending order", &values)?;

		// 11.
		numbers::shuffle_inner(&mut self.rng, &mut values);
		write_list(out, "Shuffled except first and last", &values)?;

		// 12.
		numbers::remove_odd(&mut values);
		write_list(out, "Odd elements removed", &values)?;

		// 13.
		let output_path = &self.config.output_path;
		match write_csv(output_path, &values) {
			Ok(()) => info!("even samples written to {}", output_path.display()),
			Err(e) => {
				warn!("skipping {}: {e}", output_path.display());
				writeln!(out, "Could not write {}, skipped", output_path.display())?;
			}
		}

		Ok(values)
	}

	/// Steps 14 and 15: distinct words of the word list and token count.
	pub fn run_word_list<W: Write>(&self, out: &mut W) -> io::Result<Option<WordSet>> {
		let path = &self.config.words_path;
		let tokens = match read_tokens(path) {
			Ok(tokens) => tokens,
			Err(e) => {
				debug!("skipping word list: {e}");
				return Ok(None);
			}
		};

		let set = WordSet::from_tokens(&tokens);
		if !set.is_empty() {
			writeln!(out, "The file {} contains the following words:", path.display())?;
			for word in &set {
				writeln!(out, "{word}")?;
			}
		}
		writeln!(out, "The file {} contains {} words", path.display(), set.total_tokens())?;

		Ok(Some(set))
	}

	/// Steps 16 and 17: line and character counts of the word list.
	pub fn run_file_stats<W: Write>(&self, out: &mut W) -> io::Result<Option<FileStats>> {
		let path = &self.config.words_path;
		let bytes = match read_bytes(path) {
			Ok(bytes) => bytes,
			Err(e) => {
				debug!("skipping file statistics: {e}");
				return Ok(None);
			}
		};

		let stats = FileStats::of(&bytes);
		writeln!(out, "The file {} contains {} lines", path.display(), stats.lines)?;
		writeln!(
			out,
			"The file {} contains {} characters, including new line characters",
			path.display(),
			stats.characters
		)?;

		Ok(Some(stats))
	}

	/// Step 18: words common to both word lists.
	///
	/// Skipped unless both files are available.
	pub fn run_common_words<W: Write>(&self, out: &mut W) -> io::Result<Option<Vec<String>>> {
		let first = &self.config.words_path;
		let second = &self.config.second_words_path;
		let (a, b) = match (read_tokens(first), read_tokens(second)) {
			(Ok(a), Ok(b)) => (WordSet::from_tokens(&a), WordSet::from_tokens(&b)),
			(Err(e), _) | (_, Err(e)) => {
				debug!("skipping common words: {e}");
				return Ok(None);
			}
		};

		let common: Vec<String> = a.intersection(&b).into_iter().map(str::to_owned).collect();
		writeln!(
			out,
			"The files {} and {} have the following words in common:",
			first.display(),
			second.display()
		)?;
		for word in &common {
			writeln!(out, "{word}")?;
		}

		Ok(Some(common))
	}

	/// Step 19.
	pub fn run_factorial<W: Write>(&self, out: &mut W) -> io::Result<Option<u64>> {
		let n = self.config.factorial_of;
		let result = numbers::factorial(n);
		match result {
			Some(value) => writeln!(out, "The factorial of {n} is {value}")?,
			None => writeln!(out, "The factorial of {n} does not fit in 64 bits")?,
		}
		Ok(result)
	}
}

/// Writes `label: a, b, c` on one line.
fn write_list<W: Write, T: Display>(out: &mut W, label: &str, values: &[T]) -> io::Result<()> {
	let rendered: Vec<String> = values.iter().map(T::to_string).collect();
	writeln!(out, "{label}: {}", rendered.join(", "))
}
