//! Errors.

/// An error turning benchmark output into [`Benchmarks`](crate::Benchmarks).
///
/// Every variant is fatal for the document being processed.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A benchmark name does not follow the `BaseName<Params...>/Size` shape.
    #[error("malformed benchmark name `{name}`: {reason}")]
    MalformedName {
        /// The raw name.
        name: String,
        /// What could not be located.
        reason: &'static str,
    },

    /// The top-level object has no `benchmarks` array.
    #[error("missing `benchmarks` key in benchmark output")]
    MissingBenchmarksKey,

    /// An `aggregate` record refers to a run that was never seen before it,
    /// the input is out of order or truncated.
    #[error("aggregate record for unknown run `{run_name}`")]
    UnresolvedAggregate {
        /// The `run_name` of the aggregate record.
        run_name: String,
    },

    /// The document is not valid JSON or a record has wrongly typed fields.
    #[error("invalid benchmark JSON: {0}")]
    Json(#[from] serde_json::Error),
}
