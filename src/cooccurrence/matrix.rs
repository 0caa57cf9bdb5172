//! Sparse, persistent word co-occurrence matrix.
//!
//! Pairs are sparse relative to the square of the vocabulary, so the matrix is
//! a map from word to a map of co-occurring word → count. Every unordered pair
//! is stored once, under its lexicographically smaller word. Words are
//! lower-cased on the way in.
//!
//! A reverse index maps each word to the rows it is stored in, so neighbour
//! lookups touch only the word's own pairs.
//!
//! All state sits behind one [`RwLock`]: writers (`record`) take it briefly
//! per context, readers share it. Enumeration via [`SparseCoOccurrenceMatrix::entries`]
//! re-acquires the read lock per row, so long enumerations never block writers
//! for their whole duration.
//!
//! # Examples
//!
//! ```
//! use termsmith::cooccurrence::SparseCoOccurrenceMatrix;
//!
//! let matrix = SparseCoOccurrenceMatrix::in_memory();
//! matrix.record(["open", "file", "stream"]);
//! matrix.record(["open", "file"]);
//!
//! assert_eq!(matrix.count("file", "open"), 2);
//! assert_eq!(matrix.count("open", "stream"), 1);
//! assert_eq!(matrix.count("open", "open"), 0);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ahash::{AHashMap, AHashSet};
use crossbeam_channel::Receiver;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::cooccurrence::persist::{self, MATRIX_FILE_NAME, MatrixData};
use crate::error::{Result, TermsmithError};

/// One stored pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatrixEntry {
    /// The lexicographically smaller word.
    pub first: String,
    /// The lexicographically larger word.
    pub second: String,
    /// Number of contexts both words appeared in.
    pub count: u64,
}

/// Word co-occurrence counts with optional file persistence.
pub struct SparseCoOccurrenceMatrix {
    state: RwLock<MatrixState>,
    path: Option<PathBuf>,
    dirty: AtomicBool,
    flush_lock: Mutex<()>,
}

/// Stored pairs plus, for each word, the rows holding it as second word.
#[derive(Default)]
struct MatrixState {
    data: MatrixData,
    rows_with: AHashMap<String, AHashSet<String>>,
}

impl MatrixState {
    fn new(data: MatrixData) -> Self {
        let mut rows_with: AHashMap<String, AHashSet<String>> = AHashMap::new();
        for (first, row) in &data.pairs {
            for second in row.keys() {
                rows_with
                    .entry(second.clone())
                    .or_default()
                    .insert(first.clone());
            }
        }
        MatrixState { data, rows_with }
    }

    fn neighbors_of(&self, word: &str) -> AHashMap<String, u64> {
        let mut neighbors = self.data.pairs.get(word).cloned().unwrap_or_default();
        if let Some(firsts) = self.rows_with.get(word) {
            for first in firsts.iter() {
                if let Some(&count) = self.data.pairs.get(first).and_then(|row| row.get(word)) {
                    neighbors.insert(first.clone(), count);
                }
            }
        }
        neighbors
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl SparseCoOccurrenceMatrix {
    /// Open the matrix stored in `directory`.
    ///
    /// A missing or corrupt matrix file is not an error: the matrix starts
    /// empty and a warning is logged. The directory itself is created on the
    /// first flush. Fails only when `directory` exists and is not a directory.
    pub fn open<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();
        if directory.exists() && !directory.is_dir() {
            return Err(TermsmithError::invalid_argument(format!(
                "{} is not a directory",
                directory.display()
            )));
        }

        let path = directory.join(MATRIX_FILE_NAME);
        let data = if path.exists() {
            match persist::load(&path) {
                Ok(data) => {
                    info!(
                        path = %path.display(),
                        words = data.word_counts.len(),
                        pairs = data.pair_count(),
                        "loaded co-occurrence matrix"
                    );
                    data
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding unreadable co-occurrence matrix");
                    MatrixData::default()
                }
            }
        } else {
            debug!(path = %path.display(), "no co-occurrence matrix yet, starting empty");
            MatrixData::default()
        };

        Ok(SparseCoOccurrenceMatrix {
            state: RwLock::new(MatrixState::new(data)),
            path: Some(path),
            dirty: AtomicBool::new(false),
            flush_lock: Mutex::new(()),
        })
    }

    /// Create a matrix that is never written to disk.
    pub fn in_memory() -> Self {
        SparseCoOccurrenceMatrix {
            state: RwLock::new(MatrixState::default()),
            path: None,
            dirty: AtomicBool::new(false),
            flush_lock: Mutex::new(()),
        }
    }

    /// The matrix file, if persisted.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record one context: every unordered pair of distinct words is counted once.
    ///
    /// Duplicates within the context and empty strings are ignored.
    pub fn record<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        unique.sort();
        unique.dedup();
        if unique.is_empty() {
            return;
        }

        let mut state = self.state.write();
        for word in &unique {
            *state.data.word_counts.entry(word.clone()).or_insert(0) += 1;
        }
        for (i, first) in unique.iter().enumerate() {
            for second in &unique[i + 1..] {
                *state
                    .data
                    .pairs
                    .entry(first.clone())
                    .or_default()
                    .entry(second.clone())
                    .or_insert(0) += 1;
                state
                    .rows_with
                    .entry(second.clone())
                    .or_default()
                    .insert(first.clone());
            }
        }
        self.dirty.store(true, Ordering::Release);
    }

    /// Record one context on the rayon pool.
    ///
    /// The returned receiver yields once the context has been recorded.
    pub fn record_async(self: &Arc<Self>, words: Vec<String>) -> Receiver<()> {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        let matrix = Arc::clone(self);
        rayon::spawn(move || {
            matrix.record(&words);
            let _ = sender.send(());
        });
        receiver
    }

    /// Number of contexts containing both words. Zero for unknown pairs and `a == b`.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        let (a, b) = (normalize(a), normalize(b));
        let (first, second) = match a.cmp(&b) {
            std::cmp::Ordering::Less => (a, b),
            std::cmp::Ordering::Greater => (b, a),
            std::cmp::Ordering::Equal => return 0,
        };
        self.state
            .read()
            .data
            .pairs
            .get(&first)
            .and_then(|row| row.get(&second))
            .copied()
            .unwrap_or(0)
    }

    /// Lazily enumerate stored pairs matching `predicate`, ordered by words.
    ///
    /// The row keys are snapshotted up front; each row is then read under its
    /// own short read lock, so pairs recorded during enumeration may or may not
    /// be seen.
    pub fn entries<'a, F>(&'a self, predicate: F) -> impl Iterator<Item = MatrixEntry> + 'a
    where
        F: Fn(&MatrixEntry) -> bool + 'a,
    {
        let mut rows: Vec<String> = self.state.read().data.pairs.keys().cloned().collect();
        rows.sort();

        rows.into_iter().flat_map(move |first| {
            let state = self.state.read();
            let mut row: Vec<MatrixEntry> = match state.data.pairs.get(&first) {
                Some(row) => row
                    .iter()
                    .map(|(second, &count)| MatrixEntry {
                        first: first.clone(),
                        second: second.clone(),
                        count,
                    })
                    .filter(|entry| predicate(entry))
                    .collect(),
                None => Vec::new(),
            };
            drop(state);
            row.sort_by(|a, b| a.second.cmp(&b.second));
            row
        })
    }

    /// Number of contexts a word appeared in.
    pub fn word_count(&self, word: &str) -> u64 {
        self.state
            .read()
            .data
            .word_counts
            .get(&normalize(word))
            .copied()
            .unwrap_or(0)
    }

    /// Every recorded word with its context count, sorted by word.
    pub fn all_words_and_counts(&self) -> Vec<(String, u64)> {
        let mut words: Vec<(String, u64)> = self
            .state
            .read()
            .data
            .word_counts
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();
        words.sort();
        words
    }

    /// Words co-occurring with `word`, with pair counts, sorted by word.
    pub fn neighbors(&self, word: &str) -> Vec<(String, u64)> {
        let mut neighbors: Vec<(String, u64)> = self
            .state
            .read()
            .neighbors_of(&normalize(word))
            .into_iter()
            .collect();
        neighbors.sort();
        neighbors
    }

    /// Words co-occurring with every one of `words`, sorted by word.
    ///
    /// The count of a common neighbour is its smallest pair count with any of
    /// the words. An empty `words` slice has no common neighbours.
    pub fn common_neighbors<S: AsRef<str>>(&self, words: &[S]) -> Vec<(String, u64)> {
        let Some((head, rest)) = words.split_first() else {
            return Vec::new();
        };

        let state = self.state.read();
        let mut common = state.neighbors_of(&normalize(head.as_ref()));
        for word in rest {
            if common.is_empty() {
                break;
            }
            let other = state.neighbors_of(&normalize(word.as_ref()));
            common.retain(|neighbor, count| match other.get(neighbor) {
                Some(&c) => {
                    *count = (*count).min(c);
                    true
                }
                None => false,
            });
        }
        drop(state);

        let mut common: Vec<(String, u64)> = common.into_iter().collect();
        common.sort();
        common
    }

    /// Number of stored pairs.
    pub fn pair_count(&self) -> usize {
        self.state.read().data.pair_count()
    }

    /// Number of distinct recorded words.
    pub fn word_total(&self) -> usize {
        self.state.read().data.word_counts.len()
    }

    /// Forget every recorded context.
    pub fn clear(&self) {
        *self.state.write() = MatrixState::default();
        self.dirty.store(true, Ordering::Release);
    }

    /// Whether there are changes not yet flushed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Persist the current state.
    ///
    /// A snapshot is serialized under the read lock, written to a temporary
    /// file and renamed over the matrix file. Concurrent flushes are
    /// serialized. In-memory matrices have nothing to flush.
    pub fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let _guard = self.flush_lock.lock();

        let bytes = {
            let state = self.state.read();
            self.dirty.store(false, Ordering::Release);
            persist::encode(&state.data)
        };

        let result = bytes.and_then(|bytes| {
            if let Some(directory) = path.parent() {
                fs::create_dir_all(directory)?;
            }
            persist::write_atomic(path, &bytes)
        });

        match &result {
            Ok(()) => debug!(path = %path.display(), "flushed co-occurrence matrix"),
            Err(_) => self.dirty.store(true, Ordering::Release),
        }
        result
    }
}

impl Drop for SparseCoOccurrenceMatrix {
    fn drop(&mut self) {
        if self.path.is_some() && self.is_dirty() {
            if let Err(e) = self.flush() {
                warn!(error = %e, "failed to flush co-occurrence matrix on drop");
            }
        }
    }
}

impl std::fmt::Debug for SparseCoOccurrenceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparseCoOccurrenceMatrix")
            .field("path", &self.path)
            .field("words", &self.word_total())
            .field("pairs", &self.pair_count())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["Open", "file", "open", "", "stream"]);

        assert_eq!(matrix.count("open", "file"), 1);
        assert_eq!(matrix.count("file", "open"), 1);
        assert_eq!(matrix.count("FILE", "Stream"), 1);
        assert_eq!(matrix.count("open", "open"), 0);
        assert_eq!(matrix.count("open", "unknown"), 0);
        assert_eq!(matrix.word_count("open"), 1);
        assert_eq!(matrix.pair_count(), 3);
        assert_eq!(matrix.word_total(), 3);
        assert!(matrix.is_dirty());
    }

    #[test]
    fn test_single_word_context_has_no_pairs() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["alone"]);
        matrix.record(Vec::<String>::new());

        assert_eq!(matrix.pair_count(), 0);
        assert_eq!(matrix.word_count("alone"), 1);
    }

    #[test]
    fn test_entries_with_predicate() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["a", "b", "c"]);
        matrix.record(["a", "b"]);

        let all: Vec<MatrixEntry> = matrix.entries(|_| true).collect();
        let pairs: Vec<(&str, &str, u64)> = all
            .iter()
            .map(|e| (e.first.as_str(), e.second.as_str(), e.count))
            .collect();
        assert_eq!(pairs, vec![("a", "b", 2), ("a", "c", 1), ("b", "c", 1)]);

        let frequent: Vec<MatrixEntry> = matrix.entries(|e| e.count > 1).collect();
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent[0].second, "b");
    }

    #[test]
    fn test_entries_while_recording() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["a", "b"]);
        matrix.record(["c", "d"]);

        let mut entries = matrix.entries(|_| true);
        let first = entries.next().unwrap();
        matrix.record(["a", "z"]);
        let rest: Vec<MatrixEntry> = entries.collect();

        assert_eq!(first.first, "a");
        assert!(rest.iter().any(|e| e.first == "c"));
    }

    #[test]
    fn test_neighbors() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["file", "open", "read"]);
        matrix.record(["file", "close"]);
        matrix.record(["open", "socket"]);

        assert_eq!(
            matrix.neighbors("open"),
            vec![
                ("file".to_string(), 1),
                ("read".to_string(), 1),
                ("socket".to_string(), 1)
            ]
        );
        assert!(matrix.neighbors("missing").is_empty());
    }

    #[test]
    fn test_lookups_trim_like_record() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["open", "file"]);

        assert_eq!(matrix.count(" open", "FILE "), 1);
        assert_eq!(matrix.word_count("  open\t"), 1);
        assert_eq!(matrix.neighbors(" File"), vec![("open".to_string(), 1)]);
        assert_eq!(
            matrix.common_neighbors(&["open "]),
            vec![("file".to_string(), 1)]
        );
        assert_eq!(matrix.count(" open", "open "), 0);
    }

    #[test]
    fn test_neighbors_on_both_sides_of_pairs() {
        let dir = tempfile::tempdir().unwrap();
        {
            let matrix = SparseCoOccurrenceMatrix::open(dir.path()).unwrap();
            matrix.record(["alpha", "middle"]);
            matrix.record(["middle", "zulu"]);
            matrix.record(["middle", "zulu"]);
            matrix.record(["beta", "zulu"]);
            assert_eq!(
                matrix.neighbors("middle"),
                vec![("alpha".to_string(), 1), ("zulu".to_string(), 2)]
            );
        }

        let matrix = SparseCoOccurrenceMatrix::open(dir.path()).unwrap();
        assert_eq!(
            matrix.neighbors("middle"),
            vec![("alpha".to_string(), 1), ("zulu".to_string(), 2)]
        );
        assert_eq!(
            matrix.neighbors("zulu"),
            vec![("beta".to_string(), 1), ("middle".to_string(), 2)]
        );

        matrix.clear();
        assert!(matrix.neighbors("zulu").is_empty());
        matrix.record(["zulu", "yankee"]);
        assert_eq!(matrix.neighbors("zulu"), vec![("yankee".to_string(), 1)]);
    }

    #[test]
    fn test_common_neighbors_use_min_count() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["file", "open", "stream"]);
        matrix.record(["file", "open", "stream"]);
        matrix.record(["file", "close", "stream"]);
        matrix.record(["open", "socket"]);

        let common = matrix.common_neighbors(&["open", "close"]);
        assert_eq!(
            common,
            vec![("file".to_string(), 1), ("stream".to_string(), 1)]
        );

        let common = matrix.common_neighbors(&["open"]);
        assert_eq!(common[0], ("file".to_string(), 2));
        assert!(matrix.common_neighbors::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_all_words_and_counts() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["b", "a"]);
        matrix.record(["a"]);

        assert_eq!(
            matrix.all_words_and_counts(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_clear() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        matrix.record(["a", "b"]);
        matrix.clear();
        assert_eq!(matrix.pair_count(), 0);
        assert_eq!(matrix.count("a", "b"), 0);
    }

    #[test]
    fn test_flush_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let matrix = SparseCoOccurrenceMatrix::open(dir.path()).unwrap();
            matrix.record(["file", "open"]);
            matrix.record(["file", "open", "close"]);
            matrix.flush().unwrap();
            assert!(!matrix.is_dirty());
        }

        let matrix = SparseCoOccurrenceMatrix::open(dir.path()).unwrap();
        assert_eq!(matrix.count("open", "file"), 2);
        assert_eq!(matrix.count("close", "file"), 1);
        assert_eq!(matrix.word_count("file"), 2);
        assert!(!matrix.is_dirty());
    }

    #[test]
    fn test_drop_flushes_dirty_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("nested").join("matrix");
        {
            let matrix = SparseCoOccurrenceMatrix::open(&storage).unwrap();
            matrix.record(["a", "b"]);
        }

        assert!(storage.join(MATRIX_FILE_NAME).exists());
        let matrix = SparseCoOccurrenceMatrix::open(&storage).unwrap();
        assert_eq!(matrix.count("a", "b"), 1);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MATRIX_FILE_NAME), "not a matrix").unwrap();

        let matrix = SparseCoOccurrenceMatrix::open(dir.path()).unwrap();
        assert_eq!(matrix.pair_count(), 0);
    }

    #[test]
    fn test_open_on_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(SparseCoOccurrenceMatrix::open(file.path()).is_err());
    }

    #[test]
    fn test_record_async() {
        let matrix = Arc::new(SparseCoOccurrenceMatrix::in_memory());
        let done = matrix.record_async(vec!["x".to_string(), "y".to_string()]);
        done.recv().unwrap();
        assert_eq!(matrix.count("x", "y"), 1);
    }

    #[test]
    fn test_concurrent_recording_loses_no_updates() {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        matrix.record(["left", "right"]);
                    }
                });
            }
        });
        assert_eq!(matrix.count("left", "right"), 800);
    }
}
