//! `benchplot` config
use std::{
    fmt,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::debug;

use benchplot_parser::{Descriptions, UnresolvedAggregates};

use crate::{
    constants::{CONFIG_DIR_NAME, DEFAULT_CONFIG_FILE_NAME},
    logging::eprintln_red,
};

mod args;
mod output;
mod tracing_config;

#[macro_use]
mod macros;

pub(crate) use output::{OutputConfig, OutputFormat};
use tracing_config::TracingConfig;

/// Header to put at the start of the generated config file.
const HEADER: &str = r"##   _                     _          _       _
##  | |__   ___ _ __   ___| |__  _ __ | | ___ | |_
##  | '_ \ / _ \ '_ \ / __| '_ \| '_ \| |/ _ \| __|
##  | |_) |  __/ | | | (__| | | | |_) | | (_) | |_
##  |_.__/ \___|_| |_|\___|_| |_| .__/|_|\___/ \__|
##                              |_|
##
## All these config values can be set to
## their default by commenting them out with '#'.

";

/// Reads the args & config file, returning the [`Config`] and the input files.
///
/// Exits the process if `--config-file` was given and cannot be read,
/// or if a found config file is invalid.
pub(crate) fn read_config_and_args() -> (Config, Vec<PathBuf>) {
    let args = args::Args::parse();
    args.do_quick_requests();

    let config = match args.config_file.clone().or_else(find_config_file) {
        Some(path) => match Config::read_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln_red(&format!("Failed to read config: {e:#}"));
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let config = args.apply_args(config);
    (config, args.files)
}

/// The first existing config file of:
/// 1. `./benchplot.toml`
/// 2. `benchplot/benchplot.toml` inside the OS config directory
fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir()
        .inspect_err(|e| debug!("Failed to read the current dir: {e}"))
        .ok()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME));

    let config_dir =
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_CONFIG_FILE_NAME));

    [current_dir, config_dir]
        .into_iter()
        .flatten()
        .inspect(|path| debug!("Looking for a config at: {}", path.display()))
        .find(|path| path.is_file())
}

config_struct! {
    /// The config for all of `benchplot`.
    #[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct Config {
        /// Drop `aggregate` records that come before their run.
        ///
        /// By default such a record aborts the run. When skipped,
        /// the statistic it carries is lost.
        ///
        /// Type         | boolean
        /// Valid values | true, false
        pub(crate) skip_unresolved_aggregates: bool,

        #[child = true]
        /// Configuration for the written report.
        pub(crate) output: OutputConfig,

        #[child = true]
        /// Configuration for `benchplot`'s logging system, tracing.
        pub(crate) tracing: TracingConfig,

        /// Benchmark descriptions, keyed by benchmark base name.
        ///
        /// `global_timing = true` reports a benchmark's cost per operation,
        /// otherwise the cost is divided by the input size.
        /// `legend` overrides the value axis label.
        ///
        /// Type         | Table of descriptions
        /// Examples     | `[descriptions.Find_Hit]` with `global_timing = true`
        pub(crate) descriptions: Descriptions,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_unresolved_aggregates: false,
            output: OutputConfig::default(),
            tracing: TracingConfig::default(),
            descriptions: Descriptions::hashmap(),
        }
    }
}

impl Config {
    /// Returns a default [`Config`], with doc comments.
    pub(crate) fn documented_config() -> String {
        let str = toml::ser::to_string_pretty(&Self::default()).unwrap();
        let mut doc = toml_edit::DocumentMut::from_str(&str).unwrap();
        Self::write_docs(doc.as_table_mut());
        format!("{HEADER}{doc}")
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    ///
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    fn read_from_path(file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = file.as_ref();
        let file_text = read_to_string(file)
            .with_context(|| format!("Failed to read config file at: {}", file.display()))?;

        let config = toml::from_str(&file_text)
            .with_context(|| format!("Failed to parse config file at: {}", file.display()))?;

        eprintln!("Using config at: {}", file.display());
        Ok(config)
    }

    /// The [`UnresolvedAggregates`] policy.
    pub(crate) const fn unresolved_aggregates(&self) -> UnresolvedAggregates {
        if self.skip_unresolved_aggregates {
            UnresolvedAggregates::Skip
        } else {
            UnresolvedAggregates::Fail
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "========== CONFIGURATION ==========\n{self:#?}\n==================================="
        )
    }
}
