use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::numbers::to_csv;

/// Failure to obtain an optional input source.
///
/// This is the only domain error of the crate. Callers are expected to
/// match on it and skip whatever depended on the source.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("input source {} is unavailable: {source}", .path.display())]
	Unavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl SourceError {
	/// Path of the source that could not be read.
	pub fn path(&self) -> &Path {
		match self {
			SourceError::Unavailable { path, .. } => path,
		}
	}
}

/// Reads the raw bytes of a file.
///
/// - The file handle is dropped before returning, on every path
/// - A missing file or a permission problem maps to `SourceError::Unavailable`
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, SourceError> {
	let path = path.as_ref();
	let unavailable = |source| SourceError::Unavailable { path: path.to_path_buf(), source };

	let mut contents = Vec::new();
	File::open(path)
		.map_err(unavailable)?
		.read_to_end(&mut contents)
		.map_err(unavailable)?;
	Ok(contents)
}

/// Reads a whole text file.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`, the content is
/// never rejected.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
	let bytes = read_bytes(path)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file and splits it into whitespace-delimited tokens.
///
/// Any whitespace separates tokens, newlines included.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SourceError> {
	let contents = read_source(path)?;
	Ok(contents.split_whitespace().map(str::to_owned).collect())
}

/// Writes integers to `path` as a single comma separated line.
///
/// Example: `[1, 3, 5]` → `1,3,5` (no trailing comma, no newline).
/// The file is always created (or truncated), an empty slice leaves it empty.
pub fn write_csv<P: AsRef<Path>>(path: P, values: &[i32]) -> io::Result<()> {
	let path = path.as_ref();
	let mut file = File::create(path)?;
	if !values.is_empty() {
		file.write_all(to_csv(values).as_bytes())?;
	}
	debug!("wrote {} values to {}", values.len(), path.display());
	Ok(())
}

/// Line and character counts of a raw text source.
///
/// Counts bytes, so a non ASCII character weighs its encoded length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileStats {
	/// Number of `'\n'` characters.
	pub lines: usize,
	/// Number of bytes, newlines included.
	pub characters: usize,
}

impl FileStats {
	pub fn of(bytes: &[u8]) -> Self {
		Self {
			lines: bytes.iter().filter(|&&b| b == b'\n').count(),
			characters: bytes.len(),
		}
	}
}
