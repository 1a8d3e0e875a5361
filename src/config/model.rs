//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "jotter.yaml";

/// Settings for a jotter session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the task list is persisted. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Name the assistant introduces itself with.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Whether responses are framed by a horizontal separator line.
    #[serde(default = "default_true")]
    pub show_border: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            bot_name: default_bot_name(),
            show_border: default_true(),
        }
    }
}

pub(super) fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("jotter.jsonl")
}

fn default_bot_name() -> String {
    "Jotter".to_string()
}

fn default_true() -> bool {
    true
}
