//! # Line Loading IO
//!
//! Sources are read whole and split on ``'\n'``.
//! A trailing newline yields a final empty line, which downstream
//! normalizers turn into a sentinel.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::errors::TPResult;

/// Load every line of the file at `path`.
///
/// ## Arguments
/// * `path` - path to a UTF-8 text file.
pub fn load_lines<P: AsRef<Path>>(path: P) -> TPResult<Vec<String>> {
    let path = path.as_ref();
    let lines = read_lines(BufReader::new(File::open(path)?))?;
    log::info!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read every line from `reader`.
///
/// Lines are split on ``'\n'`` only; a trailing ``'\r'`` is removed
/// from each line.
pub fn read_lines<R: Read>(mut reader: R) -> TPResult<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}

/// Load a vocabulary word list, sorted.
///
/// The file may be in any order; one word per line.
pub fn load_vocabulary_words<P: AsRef<Path>>(path: P) -> TPResult<Vec<String>> {
    let mut words = load_lines(path)?;
    words.sort();
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::errors::TagprepError;

    #[test]
    fn test_read_lines_keeps_blank_lines() {
        let lines = read_lines("a NN\n\nb VB\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["a NN", "", "b VB", ""]);
    }

    #[test]
    fn test_read_lines_strips_carriage_returns() {
        let lines = read_lines("a\r\nb".as_bytes()).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_read_lines_empty_source() {
        let lines = read_lines("".as_bytes()).unwrap();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_load_vocabulary_words_sorted() {
        tempdir::TempDir::new("vocab_io_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");
                let mut file = File::create(&path)?;
                write!(file, "the\ndog\nran")?;
                drop(file);

                let words = load_vocabulary_words(&path).expect("failed to load vocab");
                assert_eq!(words, vec!["dog", "ran", "the"]);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_lines("/nonexistent/tagprep/corpus.pos").unwrap_err();
        assert!(matches!(err, TagprepError::Io(_)));
    }
}
