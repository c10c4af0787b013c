use std::collections::VecDeque;
use std::io::BufRead;

use log::debug;

use crate::error::{Error, Result};

/// Reads whitespace-delimited words from a buffered reader.
#[derive(Debug)]
pub struct WordReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Returns the next word, or `None` once the input is exhausted.
    pub fn next_word(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_ascii_whitespace().map(str::to_owned));
        }

        let word = self.pending.pop_front();
        debug!("read word {:?}", word);
        Ok(word)
    }
}

/// Reads two consecutive words from `reader`.
///
/// # Examples
///
/// ```
/// use editdist::words::read_word_pair;
///
/// let (a, b) = read_word_pair("kitten\n  sitting\n".as_bytes()).unwrap();
/// assert_eq!((a.as_str(), b.as_str()), ("kitten", "sitting"));
/// ```
pub fn read_word_pair<R: BufRead>(reader: R) -> Result<(String, String)> {
    let mut words = WordReader::new(reader);
    let first = words.next_word()?.ok_or(Error::MissingWord {
        expected: 2,
        found: 0,
    })?;
    let second = words.next_word()?.ok_or(Error::MissingWord {
        expected: 2,
        found: 1,
    })?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_words_across_lines() {
        let mut words = WordReader::new("\n\n  flaw\t\n\nlawn\n".as_bytes());
        assert_eq!(words.next_word().unwrap().as_deref(), Some("flaw"));
        assert_eq!(words.next_word().unwrap().as_deref(), Some("lawn"));
        assert_eq!(words.next_word().unwrap(), None);
    }

    #[test]
    fn test_several_words_on_one_line() {
        let mut words = WordReader::new("one two three".as_bytes());
        assert_eq!(words.next_word().unwrap().as_deref(), Some("one"));
        assert_eq!(words.next_word().unwrap().as_deref(), Some("two"));
        assert_eq!(words.next_word().unwrap().as_deref(), Some("three"));
        assert_eq!(words.next_word().unwrap(), None);
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        let (a, b) = read_word_pair("new\u{a0}york\u{2003}city\r\nbar\n".as_bytes()).unwrap();
        assert_eq!(a, "new\u{a0}york\u{2003}city");
        assert_eq!(b, "bar");
    }

    #[test]
    fn test_pair_missing_words() {
        let err = read_word_pair("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingWord { expected: 2, found: 0 }));

        let err = read_word_pair("   only\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingWord { expected: 2, found: 1 }));
        assert_eq!(err.to_string(), "expected 2 words on input, found 1");
    }

    #[test]
    fn test_pair_ignores_trailing_words() {
        let (a, b) = read_word_pair("café cafe extra\n".as_bytes()).unwrap();
        assert_eq!(a, "café");
        assert_eq!(b, "cafe");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_io_error_propagates() {
        let err = read_word_pair(io::BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let err = read_word_pair(&[0xff, 0xfe, b'\n'][..]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
