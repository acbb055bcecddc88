use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{ModelError, Result};

/// Reads a whole corpus file into memory.
///
/// Line endings are kept as-is: newlines are ordinary corpus characters.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	read_corpus_from(File::open(filename)?)
}

/// Reads a corpus from any reader (file, stdin, in-memory buffer).
///
/// Fails with an `InvalidData` I/O error if the input is not valid UTF-8.
pub fn read_corpus_from<R: Read>(mut reader: R) -> Result<String> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Opens a corpus file for single-pass, line-buffered reading.
pub fn open_corpus<P: AsRef<Path>>(filename: P) -> Result<CorpusChars<BufReader<File>>> {
	Ok(CorpusChars::new(BufReader::new(File::open(filename)?)))
}

/// Streams the characters of a corpus, one buffered line at a time.
///
/// An I/O or decoding error ends the stream early; it is kept and reported
/// by [`CorpusChars::finish`] once the consumer is done.
///
/// # Example
///
/// ```
/// use charlm_core::io::CorpusChars;
/// use charlm_core::model::{LanguageModel, ModelConfig};
///
/// let mut chars = CorpusChars::new("ababab".as_bytes());
/// let mut model = LanguageModel::new(ModelConfig::new(2)?.with_seed(20));
/// model.train_chars(&mut chars)?;
/// chars.finish()?;
/// assert_eq!(model.generate("ab", 4), "ababab");
/// # Ok::<(), charlm_core::ModelError>(())
/// ```
#[derive(Debug)]
pub struct CorpusChars<R> {
	reader: R,
	line: String,
	position: usize,
	error: Option<std::io::Error>,
}

impl<R: BufRead> CorpusChars<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			line: String::new(),
			position: 0,
			error: None,
		}
	}

	/// Reports the error that stopped the stream, if any.
	pub fn finish(self) -> Result<()> {
		match self.error {
			Some(e) => Err(ModelError::Io(e)),
			None => Ok(()),
		}
	}
}

impl<R: BufRead> Iterator for CorpusChars<R> {
	type Item = char;

	fn next(&mut self) -> Option<char> {
		loop {
			if let Some(c) = self.line[self.position..].chars().next() {
				self.position += c.len_utf8();
				return Some(c);
			}
			if self.error.is_some() {
				return None;
			}

			self.line.clear();
			self.position = 0;
			match self.reader.read_line(&mut self.line) {
				Ok(0) => return None,
				Ok(_) => (),
				Err(e) => {
					self.error = Some(e);
					return None;
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::ErrorKind;

	#[test]
	fn reader_contents_are_kept_verbatim() {
		let corpus = read_corpus_from("one\r\ntwo\n".as_bytes()).unwrap();
		assert_eq!(corpus, "one\r\ntwo\n");
	}

	#[test]
	fn invalid_utf8_is_rejected() {
		match read_corpus_from(&[0xff, 0xfe][..]) {
			Err(ModelError::Io(e)) => assert_eq!(e.kind(), ErrorKind::InvalidData),
			other => panic!("expected an io error, got {other:?}"),
		}
	}

	#[test]
	fn missing_file_is_a_model_io_error() {
		match read_corpus("./definitely/not/here.txt") {
			Err(ModelError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
			other => panic!("expected an io error, got {other:?}"),
		}
		assert!(matches!(
			open_corpus("./definitely/not/here.txt"),
			Err(ModelError::Io(_))
		));
	}

	#[test]
	fn streamed_chars_match_contents() {
		let text = "été\r\nab\n\nlast";
		let mut chars = CorpusChars::new(text.as_bytes());
		let streamed: String = chars.by_ref().collect();
		assert_eq!(streamed, text);
		assert!(chars.finish().is_ok());
	}

	#[test]
	fn stream_error_is_reported_by_finish() {
		let bytes: &[u8] = b"ab\n\xff\xfe\ncd\n";
		let mut chars = CorpusChars::new(bytes);
		let streamed: String = chars.by_ref().collect();
		assert_eq!(streamed, "ab\n");
		assert_eq!(chars.next(), None);
		match chars.finish() {
			Err(ModelError::Io(e)) => assert_eq!(e.kind(), ErrorKind::InvalidData),
			other => panic!("expected an io error, got {other:?}"),
		}
	}
}
