use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{ConfigError, GroupError};

/// Configuration baked into the binary, used when no `--config` is given.
pub const DEFAULT_CONFIG: &str = include_str!("./resources/config.toml");

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OutputFmt {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFmt {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFmt::Text),
            "json" => Ok(OutputFmt::Json),
            "csv" => Ok(OutputFmt::Csv),
            _ => Err(ConfigError::UnknownFormat(s.into())),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default = "default_max_per_group")]
    pub max_per_group: usize,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_output_fmt")]
    pub output_format: OutputFmt,
    pub log_level: Option<String>,
}

fn default_max_per_group() -> usize {
    5
}
fn default_separator() -> String {
    String::from(",")
}
fn default_marker() -> String {
    String::from(", ...")
}
fn default_output_fmt() -> OutputFmt {
    OutputFmt::Text
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: Vec::new(),
            max_per_group: default_max_per_group(),
            separator: default_separator(),
            marker: default_marker(),
            output_format: default_output_fmt(),
            log_level: None,
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Loads the config at `path`, or the embedded default when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                raw.parse()
            }
            None => DEFAULT_CONFIG.parse(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_per_group == 0 {
            return Err(ConfigError::InvalidMaxPerGroup(self.max_per_group));
        }
        Ok(())
    }
}

/// Expands the given input paths into the list of files to group.
///
/// Directories are walked recursively, following symlinks, and contribute
/// their regular files sorted by file name. Entries that cannot be listed
/// come back as [`GroupError::Walk`] in walk order. Anything else, including
/// paths that do not exist, is passed through so the grouper can report it.
pub fn collect_input_files(paths: &[PathBuf]) -> Vec<Result<PathBuf, GroupError>> {
    paths
        .iter()
        .flat_map(|path| {
            if path.is_dir() {
                recurs_get_files(path)
            } else {
                vec![Ok(path.clone())]
            }
        })
        .collect()
}

fn recurs_get_files(data_root_dir: &Path) -> Vec<Result<PathBuf, GroupError>> {
    WalkDir::new(data_root_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(f) if f.file_type().is_file() => Some(Ok(f.into_path())),
            Ok(_) => None,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| data_root_dir.to_path_buf());
                Some(Err(GroupError::Walk { path, source }))
            }
        })
        .collect()
}
