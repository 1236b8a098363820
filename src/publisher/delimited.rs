use std::fmt::Display;
use std::io::{self, Write};

use super::{Layout, Publisher};
use crate::processor::GroupTable;

const TRUNCATED_FIELD: &str = "...";

/// One CSV record per group. Records vary in length, and a truncated
/// group ends with a `...` field.
pub struct CsvPublisher {
    layout: Layout,
}

impl CsvPublisher {
    pub fn new(layout: Layout) -> Self {
        CsvPublisher { layout }
    }
}

impl Publisher for CsvPublisher {
    fn publish<K, W>(&self, groups: &GroupTable<K>, out: &mut W) -> io::Result<()>
    where
        K: Display,
        W: Write,
    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut *out);

        for words in groups.values() {
            let (shown, truncated) = self.layout.cap(words);
            let mut record: Vec<&str> = shown.iter().map(String::as_str).collect();
            if truncated {
                record.push(TRUNCATED_FIELD);
            }
            writer.write_record(&record)?;
        }
        writer.flush()
    }
}
