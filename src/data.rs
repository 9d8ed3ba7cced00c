// src/data.rs
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::core::types::WordFrequency;

/// Errors from the word-frequency text boundary.
///
/// The dictionary contract itself never produces errors; `Result` only
/// appears here, where file contents come in.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected `<word> <frequency>`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: invalid frequency {value:?}")]
    BadFrequency {
        line: usize,
        value: String,
        source: ParseIntError,
    },

    #[error("sample size {requested} exceeds data set size {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

/// Parses `word frequency` pairs, one per line, whitespace separated.
/// Blank lines are skipped. Duplicate words are kept as-is; the dictionary
/// drops them at build time (first occurrence wins).
pub fn parse_word_frequencies(text: &str) -> Result<Vec<WordFrequency>, DataError> {
    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut fields = raw.split_whitespace();
        let (word, value) = match (fields.next(), fields.next(), fields.next()) {
            (None, _, _) => continue,
            (Some(word), Some(value), None) => (word, value),
            _ => {
                return Err(DataError::MalformedLine {
                    line,
                    content: raw.to_string(),
                })
            }
        };
        let frequency = value.parse().map_err(|source| DataError::BadFrequency {
            line,
            value: value.to_string(),
            source,
        })?;
        entries.push(WordFrequency::new(word, frequency));
    }
    Ok(entries)
}

/// Reads a word-frequency data file from disk.
pub fn read_word_frequencies(path: &Path) -> Result<Vec<WordFrequency>, DataError> {
    let entries = parse_word_frequencies(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = entries.len(), "loaded word frequencies");
    Ok(entries)
}

/// Draws `size` entries uniformly at random, without replacement. Fails if
/// the data set is smaller than the requested sample.
pub fn sample_word_frequencies<R: Rng + ?Sized>(
    entries: &[WordFrequency],
    size: usize,
    rng: &mut R,
) -> Result<Vec<WordFrequency>, DataError> {
    if entries.len() < size {
        return Err(DataError::SampleTooLarge {
            requested: size,
            available: entries.len(),
        });
    }
    Ok(entries.choose_multiple(rng, size).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_whitespace_separated_pairs() {
        let entries = parse_word_frequencies("apple 5\napp 10\n\n  apt\t3\n").unwrap();
        assert_eq!(
            entries,
            vec![
                WordFrequency::new("apple", 5),
                WordFrequency::new("app", 10),
                WordFrequency::new("apt", 3),
            ]
        );
    }

    #[test]
    fn rejects_malformed_lines_with_position() {
        let err = parse_word_frequencies("apple 5\njust_a_word\n").unwrap_err();
        assert!(matches!(err, DataError::MalformedLine { line: 2, .. }));

        let err = parse_word_frequencies("apple 5 extra\n").unwrap_err();
        assert!(matches!(err, DataError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_and_negative_frequencies() {
        let err = parse_word_frequencies("apple five\n").unwrap_err();
        assert!(matches!(err, DataError::BadFrequency { line: 1, .. }));

        let err = parse_word_frequencies("apple -2\n").unwrap_err();
        assert!(matches!(err, DataError::BadFrequency { line: 1, .. }));
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zebra 2").unwrap();
        writeln!(file, "yak 7").unwrap();
        let entries = read_word_frequencies(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], WordFrequency::new("zebra", 2));
    }

    #[test]
    fn sampling_is_without_replacement_and_bounded() {
        let entries: Vec<WordFrequency> = (0..20)
            .map(|i| WordFrequency::new(format!("w{i}"), i))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sample_word_frequencies(&entries, 5, &mut rng).unwrap();
        assert_eq!(sample.len(), 5);
        let mut words: Vec<&str> = sample.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), 5);

        let err = sample_word_frequencies(&entries, 21, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DataError::SampleTooLarge {
                requested: 21,
                available: 20
            }
        ));
    }
}
