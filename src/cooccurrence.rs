//! Word co-occurrence statistics.
//!
//! Identifiers that appear together in the same program element (a method
//! body, a class) are recorded as co-occurring. The counts drive the
//! co-occurrence query reformer: given the other terms of a query, the words
//! that co-occur with all of them are likely useful additions.

pub mod matrix;
mod persist;

pub use matrix::{MatrixEntry, SparseCoOccurrenceMatrix};
pub use persist::MATRIX_FILE_NAME;
