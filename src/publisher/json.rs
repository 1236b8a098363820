use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use super::{Layout, Publisher};
use crate::processor::GroupTable;

#[derive(Serialize, Debug)]
struct GroupView<'a> {
    key: String,
    size: usize,
    words: &'a [String],
    truncated: bool,
}

/// Publishes a file's groups as a single JSON array.
pub struct JsonPublisher {
    layout: Layout,
}

impl JsonPublisher {
    pub fn new(layout: Layout) -> Self {
        JsonPublisher { layout }
    }
}

impl Publisher for JsonPublisher {
    fn publish<K, W>(&self, groups: &GroupTable<K>, out: &mut W) -> io::Result<()>
    where
        K: Display,
        W: Write,
    {
        let views: Vec<_> = groups
            .iter()
            .map(|(key, words)| {
                let (shown, truncated) = self.layout.cap(words);
                GroupView {
                    key: key.to_string(),
                    size: words.len(),
                    words: shown,
                    truncated,
                }
            })
            .collect();

        serde_json::to_writer(&mut *out, &views)?;
        writeln!(out)
    }
}
