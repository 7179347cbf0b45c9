//! Writing the [`Report`].
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::Context;
use tracing::info;

use crate::{
    config::{OutputConfig, OutputFormat},
    constants::STDOUT_PATH,
    report::Report,
};

/// Write the report to the configured path in the configured format.
pub(crate) fn write_report(report: &Report<'_>, output: &OutputConfig) -> anyhow::Result<()> {
    let path = &output.path;

    if path.as_os_str() == STDOUT_PATH {
        let mut stdout = io::stdout().lock();
        print_report(report, output.format, &mut stdout)?;
        stdout.flush()?;
    } else {
        let file = File::create(path)
            .with_context(|| format!("{}: failed to create", path.display()))?;
        let mut writer = BufWriter::new(file);
        print_report(report, output.format, &mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("{}: failed to write", path.display()))?;
        info!("Wrote {} report to {}", output.format, path.display());
    }

    Ok(())
}

/// Write `report` to `w` as `format`.
pub(crate) fn print_report<W: Write>(
    report: &Report<'_>,
    format: OutputFormat,
    w: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => print_report_json(report, w),
        OutputFormat::Markdown => print_report_markdown(report, w),
    }
}

/// The whole report as pretty JSON.
pub(crate) fn print_report_json<W: Write>(report: &Report<'_>, w: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)
}

/// One table per plot group, one column per trace.
///
/// Cells past the end of a trace, or sizes past the end of the x-axis, are `-`.
pub(crate) fn print_report_markdown<W: Write>(report: &Report<'_>, w: &mut W) -> io::Result<()> {
    for group in report.groups.groups() {
        writeln!(w, "## `{}`\n", group.name)?;
        writeln!(w, "{}\n", group.legend)?;

        let mut header = String::from("| Size     |");
        let mut separator = String::from("|----------|");
        for trace in &group.traces {
            header += &format!(" `{}` |", trace.label);
            separator += &format!("{}|", "-".repeat(trace.label.len() + 4));
        }
        writeln!(w, "{header}\n{separator}")?;

        // A trace longer than the x-axis keeps its extra values, with no size.
        let rows = group
            .traces
            .iter()
            .map(|trace| trace.values.len())
            .fold(group.x_values.len(), usize::max);

        for i in 0..rows {
            let mut row = match group.x_values.get(i) {
                Some(size) => format!("| {size:<8} |"),
                None => format!("| {:<8} |", "-"),
            };
            for trace in &group.traces {
                let width = trace.label.len() + 2;
                match trace.values.get(i) {
                    Some(value) => row += &format!(" {value:<width$.3} |"),
                    None => row += &format!(" {:<width$} |", "-"),
                }
            }
            writeln!(w, "{row}")?;
        }

        writeln!(w)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use benchplot_parser::{Descriptions, UnresolvedAggregates};

    use super::*;
    use crate::load::load_reader;

    fn report(descriptions: &Descriptions) -> Report<'_> {
        let json = json!({
            "context": { "num_cpus": 4 },
            "benchmarks": [
                {
                    "name": "Insert_Random<int64_t, int64_t, std::unordered_map>/1000",
                    "iterations": 100, "real_time": 2000.0, "cpu_time": 2000.0, "time_unit": "ns"
                },
                {
                    "name": "Insert_Random<int64_t, int64_t, std::unordered_map>/2000",
                    "iterations": 100, "real_time": 6000.0, "cpu_time": 6000.0, "time_unit": "ns"
                },
                {
                    "name": "Insert_Random<int64_t, int64_t, tsl::robin_map>/1000",
                    "iterations": 100, "real_time": 1000.0, "cpu_time": 1000.0, "time_unit": "ns"
                }
            ]
        })
        .to_string();

        let source = load_reader(json.as_bytes(), "stdin", UnresolvedAggregates::Fail).unwrap();
        Report::new(vec![source], descriptions).unwrap()
    }

    #[test]
    fn markdown() {
        let descriptions = Descriptions::new();
        let report = report(&descriptions);

        let mut out = Vec::new();
        print_report(&report, OutputFormat::Markdown, &mut out).unwrap();

        let expected = "\
## `Insert_Random<int64_t, int64_t>`

nanoseconds per element

| Size     | `std::unordered_map<int64_t, int64_t>` | `tsl::robin_map<int64_t, int64_t>` |
|----------|----------------------------------------|------------------------------------|
| 1000     | 2.000                                  | 1.000                              |
| 2000     | 3.000                                  | -                                  |

";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    /// A trace with more sizes than the group's x-axis keeps every value.
    #[test]
    fn markdown_trace_longer_than_x_axis() {
        let json = json!({
            "benchmarks": [
                {
                    "name": "Find_Hit<int64_t, int64_t, A>/10",
                    "iterations": 1, "real_time": 10.0, "cpu_time": 10.0, "time_unit": "ns"
                },
                {
                    "name": "Find_Hit<int64_t, int64_t, B>/10",
                    "iterations": 1, "real_time": 20.0, "cpu_time": 20.0, "time_unit": "ns"
                },
                {
                    "name": "Find_Hit<int64_t, int64_t, B>/20",
                    "iterations": 1, "real_time": 80.0, "cpu_time": 80.0, "time_unit": "ns"
                }
            ]
        })
        .to_string();
        let source = load_reader(json.as_bytes(), "stdin", UnresolvedAggregates::Fail).unwrap();
        let descriptions = Descriptions::new();
        let report = Report::new(vec![source], &descriptions).unwrap();

        let mut out = Vec::new();
        print_report_markdown(&report, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let rows = out
            .lines()
            .filter(|line| line.starts_with("| ") && !line.starts_with("| Size"))
            .map(|line| {
                line.split('|')
                    .map(str::trim)
                    .filter(|cell| !cell.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            [vec!["10", "1.000", "2.000"], vec!["-", "-", "4.000"]]
        );
    }

    #[test]
    fn json() {
        let descriptions = Descriptions::hashmap();
        let report = report(&descriptions);

        let mut out = Vec::new();
        print_report(&report, OutputFormat::Json, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value["contexts"],
            json!([{
                "source": "stdin",
                "context": {
                    "date": null, "host_name": null, "executable": null, "num_cpus": 4,
                    "mhz_per_cpu": null, "cpu_scaling_enabled": null, "library_build_type": null
                }
            }])
        );
        assert_eq!(value["descriptions"]["Rehash"]["global_timing"], json!(true));
        assert_eq!(
            value["groups"]["Insert_Random<int64_t, int64_t>"]["traces"][0],
            json!({ "label": "std::unordered_map<int64_t, int64_t>", "values": [2.0, 3.0] })
        );
    }

    #[test]
    fn write_to_file() {
        let descriptions = Descriptions::new();
        let report = report(&descriptions);
        let dir = tempfile::tempdir().unwrap();

        let output = OutputConfig {
            path: dir.path().join("report.json"),
            format: OutputFormat::Json,
        };
        write_report(&report, &output).unwrap();

        let written = std::fs::read_to_string(&output.path).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["groups"].as_object().unwrap().len(), 1);
    }
}
