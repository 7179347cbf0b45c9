//! The google-benchmark JSON document.
//!
//! Only the fields needed to build [`BenchmarkRecord`](crate::BenchmarkRecord)s
//! are read, anything else in the document is ignored.

//---------------------------------------------------------------------------------------------------- Use
use std::io::Read;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::ReportError;

//---------------------------------------------------------------------------------------------------- BenchmarkDocument
/// One benchmark output document.
///
/// ```rust
/// use benchplot_parser::{BenchmarkDocument, ReportError};
///
/// let doc = BenchmarkDocument::from_json(r#"{"benchmarks": []}"#).unwrap();
/// assert!(doc.into_records().unwrap().1.is_empty());
///
/// let doc = BenchmarkDocument::from_json(r#"{"context": {}}"#).unwrap();
/// assert!(matches!(doc.into_records(), Err(ReportError::MissingBenchmarksKey)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BenchmarkDocument {
    /// Information about the machine and binary that ran the benchmarks.
    pub context: Option<RunContext>,
    /// The records, in output order.
    pub benchmarks: Option<Vec<RawRecord>>,
}

impl BenchmarkDocument {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    /// Returns [`ReportError::Json`] on invalid JSON.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a document from a reader.
    ///
    /// # Errors
    /// Returns [`ReportError::Json`] on invalid JSON or an I/O failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Splits the document into its context and records.
    ///
    /// # Errors
    /// Returns [`ReportError::MissingBenchmarksKey`] if the document has no `benchmarks`.
    pub fn into_records(self) -> Result<(Option<RunContext>, Vec<RawRecord>), ReportError> {
        let records = self.benchmarks.ok_or(ReportError::MissingBenchmarksKey)?;
        Ok((self.context, records))
    }
}

//---------------------------------------------------------------------------------------------------- RunContext
/// The `context` object of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    pub date: Option<String>,
    pub host_name: Option<String>,
    pub executable: Option<String>,
    pub num_cpus: Option<u64>,
    pub mhz_per_cpu: Option<u64>,
    pub cpu_scaling_enabled: Option<bool>,
    pub library_build_type: Option<String>,
}

//---------------------------------------------------------------------------------------------------- RawRecord
/// One entry of the `benchmarks` array, before resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    /// The record name, aggregates carry a `_mean`/`_median`/`_stddev` suffix.
    pub name: String,
    /// The run this record belongs to.
    ///
    /// Older outputs do not have this field, [`Self::run_name`] falls back to `name`.
    pub run_name: Option<String>,
    #[serde(default)]
    pub run_type: RunType,
    /// Only set on `aggregate` records.
    pub aggregate_name: Option<AggregateName>,
    pub iterations: u64,
    pub real_time: f64,
    pub cpu_time: f64,
    pub time_unit: TimeUnit,
}

impl RawRecord {
    /// The run this record belongs to.
    pub fn run_name(&self) -> &str {
        self.run_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` if the record is its own run, i.e. `run_name == name`.
    pub fn is_own_run(&self) -> bool {
        self.run_name() == self.name
    }
}

//---------------------------------------------------------------------------------------------------- RunType
/// The `run_type` of a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RunType {
    /// A measurement sample.
    Iteration,
    /// A statistic computed over the iterations of a run.
    Aggregate,
    /// The field is absent.
    #[default]
    Unspecified,
    /// Any other value.
    Other(String),
}

impl From<String> for RunType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "iteration" => Self::Iteration,
            "aggregate" => Self::Aggregate,
            _ => Self::Other(s),
        }
    }
}

//---------------------------------------------------------------------------------------------------- AggregateName
/// The `aggregate_name` of an `aggregate` record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AggregateName {
    Mean,
    Median,
    Stddev,
    /// Statistics this crate does not use, e.g. `cv`.
    Other(String),
}

impl From<String> for AggregateName {
    fn from(s: String) -> Self {
        match s.as_str() {
            "mean" => Self::Mean,
            "median" => Self::Median,
            "stddev" => Self::Stddev,
            _ => Self::Other(s),
        }
    }
}

//---------------------------------------------------------------------------------------------------- TimeUnit
/// The unit of `real_time` and `cpu_time`.
///
/// ```rust
/// use benchplot_parser::TimeUnit;
///
/// assert_eq!("us".parse::<TimeUnit>().unwrap(), TimeUnit::Us);
/// assert_eq!(TimeUnit::Ns.to_string(), "ns");
/// assert_eq!(TimeUnit::Ms.long_name(), "milliseconds");
/// ```
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ns,
    Us,
    Ms,
    S,
}

impl TimeUnit {
    /// The unit spelled out, used in chart legends.
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Ns => "nanoseconds",
            Self::Us => "microseconds",
            Self::Ms => "milliseconds",
            Self::S => "seconds",
        }
    }
}
