#![doc = include_str!("../README.md")]

use std::{path::PathBuf, process::ExitCode};

use tracing::debug;

mod config;
mod constants;
mod load;
mod logging;
mod print;
mod report;

use config::Config;
use report::Report;

fn main() -> ExitCode {
    let (config, files) = config::read_config_and_args();

    logging::init_logging(&config);
    debug!("{config}");

    match run(&config, &files) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::eprintln_red(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Loads every source and writes the report.
fn run(config: &Config, files: &[PathBuf]) -> anyhow::Result<()> {
    let sources = load::load_sources(files, config.unresolved_aggregates())?;
    let report = Report::new(sources, &config.descriptions)?;
    print::write_report(&report, &config.output)
}
