use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while grouping a single input file.
///
/// Each variant aborts the current input only; the driver reports it and
/// moves on to the next path.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error("could not open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading {} at line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("could not list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl GroupError {
    pub fn path(&self) -> &Path {
        match self {
            GroupError::FileAccess { path, .. }
            | GroupError::Read { path, .. }
            | GroupError::Walk { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_per_group must be at least 1, got {0}")]
    InvalidMaxPerGroup(usize),
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown output format {0:?}, expected one of Text, Json, Csv")]
    UnknownFormat(String),
}

/// Errors that stop the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed writing output: {0}")]
    Output(#[from] io::Error),
}
