//! Reading benchmark documents.
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
};

use anyhow::Context;
use tracing::{info, instrument};

use benchplot_parser::{Aggregator, BenchmarkDocument, Benchmarks, RunContext, UnresolvedAggregates};

/// One aggregated benchmark document.
#[derive(Debug)]
pub(crate) struct Source {
    /// Where the document was read from.
    pub(crate) name: String,
    pub(crate) context: Option<RunContext>,
    pub(crate) benchmarks: Benchmarks,
}

/// Parse and aggregate one document, `name` is used in errors and logs.
///
/// Each document gets its own [`Aggregator`].
#[instrument(skip(reader, unresolved))]
pub(crate) fn load_reader<R: Read>(
    reader: R,
    name: &str,
    unresolved: UnresolvedAggregates,
) -> anyhow::Result<Source> {
    let document = BenchmarkDocument::from_reader(reader)
        .with_context(|| format!("{name}: invalid benchmark document"))?;
    let (context, records) = document
        .into_records()
        .with_context(|| format!("{name}: invalid benchmark document"))?;

    let mut aggregator = Aggregator::with_unresolved(unresolved);
    aggregator
        .push_all(&records)
        .with_context(|| format!("{name}: failed to aggregate records"))?;
    let benchmarks = aggregator.finish();

    info!(
        "{name}: {} records, {} benchmarks, {} canonical records",
        records.len(),
        benchmarks.len(),
        benchmarks.record_count()
    );

    Ok(Source {
        name: name.to_owned(),
        context,
        benchmarks,
    })
}

/// Load every file, in order.
///
/// # Errors
/// Fails on the first file that cannot be opened or aggregated.
pub(crate) fn load_files(
    files: &[PathBuf],
    unresolved: UnresolvedAggregates,
) -> anyhow::Result<Vec<Source>> {
    files
        .iter()
        .map(|path| {
            let name = path.display().to_string();
            let file = File::open(path).with_context(|| format!("{name}: failed to open"))?;
            load_reader(BufReader::new(file), &name, unresolved)
        })
        .collect()
}

/// Load the files, or stdin if there are none.
pub(crate) fn load_sources(
    files: &[PathBuf],
    unresolved: UnresolvedAggregates,
) -> anyhow::Result<Vec<Source>> {
    if files.is_empty() {
        Ok(vec![load_reader(io::stdin().lock(), "stdin", unresolved)?])
    } else {
        load_files(files, unresolved)
    }
}
