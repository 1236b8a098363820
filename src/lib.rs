//! Groups the words of plain-text word lists into anagram classes.
//!
//! Each input file is read line by line, every trimmed line is keyed by its
//! sorted characters, and lines sharing a key end up in the same group.
//! Groups are kept in first-seen order and published with a display cap.
//!
//! ```no_run
//! use anagrouper::{group_anagrams, print_groups};
//!
//! let groups = group_anagrams("words.txt")?;
//! print_groups(&groups, 5)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod grouper;
pub mod processor;
pub mod publisher;
pub mod util;

use std::io::Write;
use std::path::PathBuf;

use log::{error, info, warn};

pub use error::{ConfigError, GroupError, RunError};
pub use grouper::{group_anagrams, group_file, group_lines};
pub use processor::anagram::{canonical_key, AnagramProcessor};
pub use processor::{GroupTable, Processor};
pub use publisher::{format_group, print_groups, Layout, Publisher};
pub use util::{Config, OutputFmt};

use publisher::{CsvPublisher, JsonPublisher, TextPublisher};

pub const USAGE_HINT: &str = "Please provide the path to the input file as an argument.";

/// Outcome of a driver run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: Vec<PathBuf>,
}

/// Groups and publishes every input named by `config`.
///
/// An input that cannot be listed, opened or read is reported and skipped.
/// In text format the report goes to `out` next to the groups; JSON and CSV
/// keep `out` machine-readable and report through the log only. Only
/// failures writing to `out` end the run early.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    if config.files.is_empty() {
        writeln!(out, "{}", USAGE_HINT)?;
        return Ok(RunSummary::default());
    }

    let inputs = util::collect_input_files(&config.files);
    if inputs.is_empty() {
        warn!("No files found under {:?}", config.files);
    }

    let layout = Layout::from(config);
    let summary = match config.output_format {
        OutputFmt::Text => publish_all(inputs, &TextPublisher::new(layout), true, out)?,
        OutputFmt::Json => publish_all(inputs, &JsonPublisher::new(layout), false, out)?,
        OutputFmt::Csv => publish_all(inputs, &CsvPublisher::new(layout), false, out)?,
    };

    info!(
        "Finished: {} file(s) grouped, {} failed",
        summary.processed,
        summary.failed.len()
    );
    Ok(summary)
}

fn publish_all<P, W>(
    inputs: Vec<Result<PathBuf, GroupError>>,
    publisher: &P,
    report_inline: bool,
    out: &mut W,
) -> Result<RunSummary, RunError>
where
    P: Publisher,
    W: Write,
{
    let mut summary = RunSummary::default();
    for input in inputs {
        let grouped = input.and_then(|file| {
            info!("Grouping {}", file.display());
            group_anagrams(&file)
        });
        match grouped {
            Ok(groups) => {
                publisher.publish(&groups, out)?;
                summary.processed += 1;
            }
            Err(err) => {
                error!("{}", err);
                if report_inline {
                    writeln!(out, "An error occurred: {}", err)?;
                }
                summary.failed.push(err.path().to_path_buf());
            }
        }
    }
    Ok(summary)
}
