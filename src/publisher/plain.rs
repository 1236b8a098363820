use std::fmt::Display;
use std::io::{self, Write};

use super::{format_group, Layout, Publisher};
use crate::processor::GroupTable;

/// One line per group, words joined by the layout separator.
pub struct TextPublisher {
    layout: Layout,
}

impl TextPublisher {
    pub fn new(layout: Layout) -> Self {
        TextPublisher { layout }
    }
}

impl Publisher for TextPublisher {
    fn publish<K, W>(&self, groups: &GroupTable<K>, out: &mut W) -> io::Result<()>
    where
        K: Display,
        W: Write,
    {
        for words in groups.values() {
            writeln!(out, "{}", format_group(words, &self.layout))?;
        }
        Ok(())
    }
}
