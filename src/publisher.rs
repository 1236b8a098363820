//!
//! Renders group tables to an output sink.
//!
//! Every publisher applies the same display cap: a group longer than
//! [`Layout::max_per_group`] is cut down and flagged as truncated. This only
//! affects what is written, never the table itself.
use std::fmt::Display;
use std::io::{self, Write};

use itertools::Itertools;

use crate::processor::GroupTable;
use crate::util::Config;

pub mod delimited;
pub mod json;
pub mod plain;

pub use delimited::CsvPublisher;
pub use json::JsonPublisher;
pub use plain::TextPublisher;

/// Presentation policy shared by all publishers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub max_per_group: usize,
    pub separator: String,
    pub marker: String,
}

impl Layout {
    pub fn new(max_per_group: usize) -> Self {
        Layout {
            max_per_group,
            separator: String::from(","),
            marker: String::from(", ..."),
        }
    }

    /// Returns the words to display and whether any were cut off.
    pub fn cap<'a>(&self, words: &'a [String]) -> (&'a [String], bool) {
        if words.len() <= self.max_per_group {
            (words, false)
        } else {
            (&words[..self.max_per_group], true)
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(5)
    }
}

impl From<&Config> for Layout {
    fn from(config: &Config) -> Self {
        Layout {
            max_per_group: config.max_per_group,
            separator: config.separator.clone(),
            marker: config.marker.clone(),
        }
    }
}

/// Writes a whole group table to `out`.
pub trait Publisher {
    fn publish<K, W>(&self, groups: &GroupTable<K>, out: &mut W) -> io::Result<()>
    where
        K: Display,
        W: Write;
}

/// Joins the displayable part of `words`, appending the marker when the
/// group exceeds the cap.
pub fn format_group(words: &[String], layout: &Layout) -> String {
    let (shown, truncated) = layout.cap(words);
    let mut line = shown.iter().join(&layout.separator);
    if truncated {
        line.push_str(&layout.marker);
    }
    line
}

/// Prints every group on its own line to standard output.
pub fn print_groups<K: Display>(groups: &GroupTable<K>, max_per_group: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    TextPublisher::new(Layout::new(max_per_group)).publish(groups, &mut out)
}
