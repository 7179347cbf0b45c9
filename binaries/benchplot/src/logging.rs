//! Logging.
use nu_ansi_term::Color;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;

/// Initializes the `tracing` logger, writing to stderr.
pub(crate) fn init_logging(config: &Config) {
    FmtSubscriber::builder()
        .with_max_level(config.tracing.level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!("Log level: {}", config.tracing.level);
}

/// Prints `s` to stderr in red.
pub(crate) fn eprintln_red(s: &str) {
    eprintln!("{}", Color::Red.bold().paint(s));
}
