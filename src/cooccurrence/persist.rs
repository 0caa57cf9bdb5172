//! On-disk format of the co-occurrence matrix.
//!
//! The file is JSON lines: a header, one record per word, one record per
//! pair, and a footer carrying the CRC32 of every byte before it.
//!
//! ```text
//! {"kind":"header","format":"termsmith-cooccurrence","version":1,"words":2,"pairs":1}
//! {"kind":"word","word":"file","count":3}
//! {"kind":"word","word":"open","count":2}
//! {"kind":"pair","first":"file","second":"open","count":2}
//! {"kind":"footer","checksum":1234567890}
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsmithError};

/// Name of the matrix file inside its storage directory.
pub const MATRIX_FILE_NAME: &str = "cooccurrence.matrix";

const FORMAT: &str = "termsmith-cooccurrence";
const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record {
    Header {
        format: String,
        version: u32,
        words: usize,
        pairs: usize,
    },
    Word {
        word: String,
        count: u64,
    },
    Pair {
        first: String,
        second: String,
        count: u64,
    },
    Footer {
        checksum: u32,
    },
}

/// In-memory matrix contents. Each pair is stored once, under its
/// lexicographically smaller word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MatrixData {
    pub(crate) pairs: AHashMap<String, AHashMap<String, u64>>,
    pub(crate) word_counts: AHashMap<String, u64>,
}

impl MatrixData {
    pub(crate) fn pair_count(&self) -> usize {
        self.pairs.values().map(|row| row.len()).sum()
    }
}

fn push_line(buffer: &mut Vec<u8>, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *buffer, record)?;
    buffer.push(b'\n');
    Ok(())
}

/// Serialize matrix contents into the file format.
pub(crate) fn encode(data: &MatrixData) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    let mut words: Vec<(&String, &u64)> = data.word_counts.iter().collect();
    words.sort();
    let mut pairs: Vec<(&String, &String, u64)> = data
        .pairs
        .iter()
        .flat_map(|(first, row)| row.iter().map(move |(second, &count)| (first, second, count)))
        .collect();
    pairs.sort();

    push_line(
        &mut buffer,
        &Record::Header {
            format: FORMAT.to_string(),
            version: VERSION,
            words: words.len(),
            pairs: pairs.len(),
        },
    )?;
    for (word, &count) in words {
        push_line(
            &mut buffer,
            &Record::Word {
                word: word.clone(),
                count,
            },
        )?;
    }
    for (first, second, count) in pairs {
        push_line(
            &mut buffer,
            &Record::Pair {
                first: first.clone(),
                second: second.clone(),
                count,
            },
        )?;
    }

    let checksum = crc32fast::hash(&buffer);
    push_line(&mut buffer, &Record::Footer { checksum })?;
    Ok(buffer)
}

fn corrupt(reason: impl std::fmt::Display) -> TermsmithError {
    TermsmithError::storage(format!("corrupt co-occurrence matrix: {reason}"))
}

/// Parse and verify the file format.
pub(crate) fn decode(bytes: &[u8]) -> Result<MatrixData> {
    let content = bytes.strip_suffix(b"\n").ok_or_else(|| corrupt("truncated"))?;
    let footer_start = content
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .ok_or_else(|| corrupt("missing footer"))?;
    let (body, footer) = content.split_at(footer_start);

    match serde_json::from_slice::<Record>(footer).map_err(corrupt)? {
        Record::Footer { checksum } if checksum == crc32fast::hash(body) => {}
        Record::Footer { .. } => return Err(corrupt("checksum mismatch")),
        _ => return Err(corrupt("missing footer")),
    }

    let body = std::str::from_utf8(body).map_err(corrupt)?;
    let mut lines = body.lines();
    let header = lines.next().ok_or_else(|| corrupt("missing header"))?;
    let header = serde_json::from_str::<Record>(header).map_err(corrupt)?;
    let (expected_words, expected_pairs) = match header {
        Record::Header {
            format,
            version,
            words,
            pairs,
        } if format == FORMAT && version == VERSION => (words, pairs),
        Record::Header { format, version, .. } => {
            return Err(corrupt(format!("unsupported format {format} v{version}")));
        }
        _ => return Err(corrupt("missing header")),
    };

    let mut data = MatrixData::default();
    let mut seen_pairs = AHashSet::new();
    for line in lines {
        match serde_json::from_str::<Record>(line).map_err(corrupt)? {
            Record::Word { word, count } => {
                if count == 0 || word.is_empty() {
                    return Err(corrupt("invalid word record"));
                }
                if data.word_counts.insert(word, count).is_some() {
                    return Err(corrupt("duplicate word record"));
                }
            }
            Record::Pair {
                first,
                second,
                count,
            } => {
                if count == 0 || first >= second {
                    return Err(corrupt("invalid pair record"));
                }
                if !seen_pairs.insert((first.clone(), second.clone())) {
                    return Err(corrupt("duplicate pair record"));
                }
                data.pairs.entry(first).or_default().insert(second, count);
            }
            _ => return Err(corrupt("unexpected record")),
        }
    }

    if data.word_counts.len() != expected_words || seen_pairs.len() != expected_pairs {
        return Err(corrupt("record counts do not match header"));
    }
    Ok(data)
}

/// Read and verify a matrix file.
pub(crate) fn load(path: &Path) -> Result<MatrixData> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Write `bytes` next to `path` and atomically move them into place.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");

    let mut file = File::create(&tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatrixData {
        let mut data = MatrixData::default();
        data.word_counts.insert("file".to_string(), 3);
        data.word_counts.insert("open".to_string(), 2);
        data.word_counts.insert("close".to_string(), 1);
        data.pairs
            .entry("file".to_string())
            .or_default()
            .insert("open".to_string(), 2);
        data.pairs
            .entry("close".to_string())
            .or_default()
            .insert("file".to_string(), 1);
        data
    }

    #[test]
    fn test_round_trip() {
        let data = sample();
        let bytes = encode(&data).unwrap();
        assert_eq!(decode(&bytes).unwrap(), data);
        assert_eq!(data.pair_count(), 2);
    }

    #[test]
    fn test_output_is_stable() {
        let bytes = encode(&sample()).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("\"kind\":\"header\""));
        assert!(lines[1].contains("\"word\":\"close\""));
        assert!(lines[4].contains("\"first\":\"close\""));
        assert!(lines[6].contains("\"kind\":\"footer\""));
        assert_eq!(encode(&sample()).unwrap(), bytes);
    }

    #[test]
    fn test_empty_matrix() {
        let bytes = encode(&MatrixData::default()).unwrap();
        assert_eq!(decode(&bytes).unwrap(), MatrixData::default());
    }

    #[test]
    fn test_truncated_file_is_corrupt() {
        let bytes = encode(&sample()).unwrap();
        assert!(decode(&bytes[..bytes.len() / 2]).is_err());
        assert!(decode(b"").is_err());
    }

    #[test]
    fn test_edited_file_is_corrupt() {
        let text = String::from_utf8(encode(&sample()).unwrap()).unwrap();
        let edited = text.replace("\"count\":3", "\"count\":4");
        assert!(decode(edited.as_bytes()).is_err());
    }

    #[test]
    fn test_self_pair_is_corrupt() {
        let mut data = sample();
        data.pairs
            .entry("open".to_string())
            .or_default()
            .insert("open".to_string(), 1);
        let bytes = encode(&data).unwrap();
        assert!(decode(&bytes).is_err());
    }
}
