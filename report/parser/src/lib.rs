#![doc = include_str!("../README.md")]

pub mod aggregate;
pub mod description;
pub mod input;
pub mod name;

mod benchmarks;
mod error;
mod merge;
mod record;

pub use aggregate::{aggregate, Aggregator, Outcome, ResolutionTable, UnresolvedAggregates};
pub use benchmarks::Benchmarks;
pub use description::{Description, Descriptions};
pub use error::ReportError;
pub use input::{AggregateName, BenchmarkDocument, RawRecord, RunContext, RunType, TimeUnit};
pub use merge::{merge, merge_all};
pub use name::BenchmarkName;
pub use record::BenchmarkRecord;
