use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::macros::config_struct;
use crate::constants::DEFAULT_OUTPUT_FILE;

/// The format of the written report.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Contexts, descriptions and plot groups as one JSON object.
    #[default]
    Json,
    /// One table per plot group.
    Markdown,
}

config_struct! {
    /// Report output config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct OutputConfig {
        /// The file the report is written to.
        ///
        /// "-" writes the report to stdout.
        ///
        /// Type         | Path
        /// Examples     | "benchmarks-results.json", "-"
        pub(crate) path: PathBuf,

        /// The report format.
        ///
        /// Type         | String
        /// Valid values | "json", "markdown"
        pub(crate) format: OutputFormat,
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::default(),
        }
    }
}
