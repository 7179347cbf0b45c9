//! Resolution of raw records into canonical [`BenchmarkRecord`]s.
//!
//! A google-benchmark run with repetitions emits, for one run name:
//!
//! ```text
//! iteration   Insert_Random<int64_t, int64_t, C>/1000          <- canonical record
//! iteration   Insert_Random<int64_t, int64_t, C>/1000          <- duplicate sample, dropped
//! aggregate   Insert_Random<int64_t, int64_t, C>/1000_mean     <- attached to the canonical record
//! aggregate   Insert_Random<int64_t, int64_t, C>/1000_median   <- attached to the canonical record
//! aggregate   Insert_Random<int64_t, int64_t, C>/1000_stddev   <- attached to the canonical record
//! ```
//!
//! The [`Aggregator`] keeps one [`ResolutionTable`] per aggregation,
//! so independent aggregations never see each other's runs.

//---------------------------------------------------------------------------------------------------- Use
use std::{borrow::Borrow, collections::HashMap};

use tracing::{debug, trace, warn};

use crate::{AggregateName, BenchmarkRecord, Benchmarks, RawRecord, ReportError, RunType};

//---------------------------------------------------------------------------------------------------- UnresolvedAggregates
/// What to do with an `aggregate` record whose run has no canonical record yet.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnresolvedAggregates {
    /// Return [`ReportError::UnresolvedAggregate`].
    #[default]
    Fail,
    /// Log and drop the record, its statistic is lost.
    Skip,
}

//---------------------------------------------------------------------------------------------------- Outcome
/// What [`Aggregator::push`] did with a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A new canonical record was emitted.
    Created,
    /// An `iteration` for a run that already has a canonical record, dropped.
    Duplicate,
    /// A statistic was attached to an existing canonical record.
    Refined,
    /// The record did not match any rule, or carried an unused statistic.
    Ignored,
    /// An unresolved `aggregate` dropped under [`UnresolvedAggregates::Skip`].
    Skipped,
}

//---------------------------------------------------------------------------------------------------- ResolutionTable
/// The position of a canonical record inside [`Benchmarks`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    full_name: String,
    index: usize,
}

/// Maps run names to their canonical record.
///
/// Only an [`Aggregator`] builds one, it is dropped with it.
/// Callers can inspect it through [`Aggregator::table`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolutionTable(HashMap<String, Slot>);

impl ResolutionTable {
    /// Returns `true` if `run_name` has a canonical record.
    pub fn contains(&self, run_name: &str) -> bool {
        self.0.contains_key(run_name)
    }

    /// The number of resolved runs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//---------------------------------------------------------------------------------------------------- Aggregator
/// Resolves [`RawRecord`]s, in input order, into [`Benchmarks`].
///
/// For each record:
/// 1. `run_name == name` and not an `iteration`: a new canonical record is emitted
/// 2. `iteration`: a canonical record is emitted for the first one of its run, later ones are dropped
/// 3. `aggregate`: the `mean`/`median`/`stddev` is attached to the run's canonical record,
///    which must already exist
/// 4. anything else is ignored
///
/// ```rust
/// use benchplot_parser::{Aggregator, Outcome, RawRecord};
///
/// let record: RawRecord = serde_json::from_str(r#"{
///     "name": "Find_Miss<int64_t, int64_t, C>/10",
///     "run_name": "Find_Miss<int64_t, int64_t, C>/10",
///     "run_type": "iteration",
///     "iterations": 1, "real_time": 1.0, "cpu_time": 1.0, "time_unit": "ns"
/// }"#).unwrap();
///
/// let mut aggregator = Aggregator::new();
/// assert_eq!(aggregator.push(&record).unwrap(), Outcome::Created);
/// assert_eq!(aggregator.push(&record).unwrap(), Outcome::Duplicate);
///
/// let benchmarks = aggregator.finish();
/// assert_eq!(benchmarks.record_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    table: ResolutionTable,
    benchmarks: Benchmarks,
    unresolved: UnresolvedAggregates,
}

impl Aggregator {
    /// An [`Aggregator`] that fails on unresolved aggregates.
    pub fn new() -> Self {
        Self::default()
    }

    /// An [`Aggregator`] with the given unresolved aggregate policy.
    pub fn with_unresolved(unresolved: UnresolvedAggregates) -> Self {
        Self {
            unresolved,
            ..Self::default()
        }
    }

    /// Resolve one record.
    ///
    /// # Errors
    /// - [`ReportError::MalformedName`] if a canonical record's run name cannot be parsed
    /// - [`ReportError::UnresolvedAggregate`] if an `aggregate` precedes its run
    ///   and the policy is [`UnresolvedAggregates::Fail`]
    pub fn push(&mut self, raw: &RawRecord) -> Result<Outcome, ReportError> {
        let run_name = raw.run_name();

        let outcome = match raw.run_type {
            RunType::Iteration => {
                if self.table.contains(run_name) {
                    debug!("duplicate iteration of {run_name}, keeping the first sample");
                    Outcome::Duplicate
                } else {
                    self.emit(raw)?
                }
            }
            _ if raw.is_own_run() => self.emit(raw)?,
            RunType::Aggregate => self.refine(raw)?,
            RunType::Unspecified | RunType::Other(_) => Outcome::Ignored,
        };

        trace!("{}: {outcome:?}", raw.name);
        Ok(outcome)
    }

    /// Resolve every record of `records`, in order.
    ///
    /// # Errors
    /// Stops at the first error, see [`Self::push`].
    pub fn push_all<I>(&mut self, records: I) -> Result<&mut Self, ReportError>
    where
        I: IntoIterator,
        I::Item: Borrow<RawRecord>,
    {
        for raw in records {
            self.push(raw.borrow())?;
        }
        Ok(self)
    }

    /// The runs resolved so far.
    pub const fn table(&self) -> &ResolutionTable {
        &self.table
    }

    /// Finish the aggregation, dropping the resolution table.
    pub fn finish(self) -> Benchmarks {
        self.benchmarks
    }

    /// Emit a new canonical record for `raw`'s run.
    fn emit(&mut self, raw: &RawRecord) -> Result<Outcome, ReportError> {
        let record = BenchmarkRecord::from_raw(raw)?;
        let slot = Slot {
            full_name: record.full_name().to_owned(),
            index: self.benchmarks.push(record),
        };

        self.table.0.insert(raw.run_name().to_owned(), slot);
        Ok(Outcome::Created)
    }

    /// Attach an `aggregate` statistic to its canonical record.
    fn refine(&mut self, raw: &RawRecord) -> Result<Outcome, ReportError> {
        let run_name = raw.run_name();

        let Some(record) = self
            .table
            .0
            .get(run_name)
            .and_then(|slot| self.benchmarks.get_mut(&slot.full_name, slot.index))
        else {
            return match self.unresolved {
                UnresolvedAggregates::Fail => Err(ReportError::UnresolvedAggregate {
                    run_name: run_name.to_owned(),
                }),
                UnresolvedAggregates::Skip => {
                    warn!("aggregate {} precedes its run, its statistic is lost", raw.name);
                    Ok(Outcome::Skipped)
                }
            };
        };

        match &raw.aggregate_name {
            Some(AggregateName::Mean) => record.attach_mean(raw.cpu_time, raw.iterations),
            Some(AggregateName::Median) => record.attach_median(raw.cpu_time),
            Some(AggregateName::Stddev) => record.attach_stddev(raw.cpu_time),
            Some(AggregateName::Other(other)) => {
                debug!("ignoring `{other}` aggregate of {run_name}");
                return Ok(Outcome::Ignored);
            }
            None => {
                debug!("aggregate {} has no aggregate_name", raw.name);
                return Ok(Outcome::Ignored);
            }
        }

        Ok(Outcome::Refined)
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Resolve `records` with a fresh [`Aggregator`] that fails on unresolved aggregates.
///
/// # Errors
/// See [`Aggregator::push`].
pub fn aggregate<I>(records: I) -> Result<Benchmarks, ReportError>
where
    I: IntoIterator,
    I::Item: Borrow<RawRecord>,
{
    let mut aggregator = Aggregator::new();
    aggregator.push_all(records)?;
    Ok(aggregator.finish())
}
