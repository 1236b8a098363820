//! This module contains processors that turn a raw input line
//! into a grouping key and the record stored under it.
//!
//! The grouper only knows about the [`Processor`] trait, so the
//! keying rule can be swapped without touching the file handling.
pub mod anagram;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;

/// Groups keyed by `K`, iterated in the order each key was first seen.
pub type GroupTable<K = String> = IndexMap<K, Vec<String>>;

/// Processes a single input line into a `(key, record)` pair.
pub trait Processor {
    type Key: Eq + Hash + Display + Debug;

    /// Cleans up the raw line before it is keyed and stored.
    fn normalize(&self, input_line: &str) -> String {
        input_line.trim().to_string()
    }

    /// Derives the grouping key for an already normalized record.
    fn key(&self, record: &str) -> Self::Key;

    /// Returns a tuple containing the key and the record.
    fn parse(&self, input_line: &str) -> (Self::Key, String) {
        let record = self.normalize(input_line);
        (self.key(&record), record)
    }

    /// Groups the given `(key, record)` pairs by their key.
    ///
    /// Group order follows the first occurrence of each key and records
    /// keep their arrival order within a group.
    fn group_output<I>(input_data: I) -> GroupTable<Self::Key>
    where
        I: IntoIterator<Item = (Self::Key, String)>,
    {
        let mut out = GroupTable::<Self::Key>::default();
        for (key, record) in input_data {
            out.entry(key).or_default().push(record);
        }
        out
    }
}
