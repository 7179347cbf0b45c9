//! General constants used throughout `benchplot`.

/// The file name `benchplot` looks for when no config file is given.
pub(crate) const DEFAULT_CONFIG_FILE_NAME: &str = "benchplot.toml";

/// The directory inside the OS config directory holding [`DEFAULT_CONFIG_FILE_NAME`].
pub(crate) const CONFIG_DIR_NAME: &str = "benchplot";

/// The default report path.
pub(crate) const DEFAULT_OUTPUT_FILE: &str = "benchmarks-results.json";

/// The path meaning stdout.
pub(crate) const STDOUT_PATH: &str = "-";
