use std::{path::PathBuf, process::exit};

use clap::builder::TypedValueParser;

use super::{Config, OutputFormat};

/// `benchplot` Args.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// A google-benchmark JSON output file, can be repeated.
    ///
    /// Files are merged in the given order, stdin is read if no file is given.
    #[arg(short, long = "file", value_name = "PATH")]
    pub(crate) files: Vec<PathBuf>,
    /// The PATH of the `benchplot` config file.
    #[arg(short, long)]
    pub(crate) config_file: Option<PathBuf>,
    /// The PATH the report is written to, "-" for stdout.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,
    /// The report format.
    #[arg(
        long,
        value_parser = clap::builder::PossibleValuesParser::new(["json", "markdown"])
            .map(|s| s.parse::<OutputFormat>().unwrap()),
    )]
    pub(crate) format: Option<OutputFormat>,
    /// Drop `aggregate` records that come before their run instead of failing.
    #[arg(long)]
    pub(crate) skip_unresolved_aggregates: bool,
    /// Generate a config file and print it to stdout.
    #[arg(long)]
    pub(crate) generate_config: bool,
}

impl Args {
    /// Complete any quick requests asked for in [`Args`].
    ///
    /// May cause the process to [`exit`].
    pub(crate) fn do_quick_requests(&self) {
        if self.generate_config {
            println!("{}", Config::documented_config());
            exit(0);
        }
    }

    /// Apply the [`Args`] to the given [`Config`].
    pub(crate) fn apply_args(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }

        if let Some(format) = self.format {
            config.output.format = format;
        }

        if self.skip_unresolved_aggregates {
            config.skip_unresolved_aggregates = true;
        }

        config
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use benchplot_parser::UnresolvedAggregates;

    use super::*;

    #[test]
    fn repeated_files() {
        let args =
            Args::try_parse_from(["benchplot", "-f", "std.json", "--file", "absl.json"]).unwrap();

        assert_eq!(args.files, [Path::new("std.json"), Path::new("absl.json")]);
        assert_eq!(args.config_file, None);
    }

    #[test]
    fn args_override_config() {
        let args = Args::try_parse_from([
            "benchplot",
            "-o",
            "-",
            "--format",
            "markdown",
            "--skip-unresolved-aggregates",
        ])
        .unwrap();
        assert!(args.files.is_empty());

        let config = args.apply_args(Config::default());
        assert_eq!(config.output.path, Path::new("-"));
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.unresolved_aggregates(), UnresolvedAggregates::Skip);
    }

    #[test]
    fn no_args_keep_config() {
        let args = Args::try_parse_from(["benchplot"]).unwrap();
        assert_eq!(args.apply_args(Config::default()), Config::default());
    }

    #[test]
    fn invalid_format() {
        assert!(Args::try_parse_from(["benchplot", "--format", "html"]).is_err());
    }
}
