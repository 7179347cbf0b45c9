//! Resolved benchmark records.

//---------------------------------------------------------------------------------------------------- Use
use std::fmt;

use serde::Serialize;

use crate::{name, BenchmarkName, Descriptions, RawRecord, ReportError, TimeUnit};

//---------------------------------------------------------------------------------------------------- BenchmarkRecord
/// One resolved benchmark measurement.
///
/// The identity (name, size, primary timings) is fixed at construction,
/// the statistics are attached later by `aggregate` records of the same run.
///
/// ```rust
/// use benchplot_parser::{BenchmarkRecord, Descriptions, TimeUnit};
///
/// let mut record = BenchmarkRecord::new(
///     "Insert_Random<int64_t, int64_t, std::unordered_map>/1000",
///     100,
///     50_000.0,
///     49_000.0,
///     TimeUnit::Ns,
/// ).unwrap();
///
/// let descriptions = Descriptions::new();
/// assert_eq!(record.value(&descriptions), 49.0);
///
/// record.attach_median(48_000.0);
/// assert_eq!(record.value(&descriptions), 48.0);
/// assert_eq!(record.legend(&descriptions), "nanoseconds per element");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    run_name: String,
    full_name: String,
    #[serde(flatten)]
    name: BenchmarkName,
    iterations: u64,
    real_time: f64,
    cpu_time: f64,
    unit: TimeUnit,
    mean: Option<f64>,
    mean_iterations: Option<u64>,
    median: Option<f64>,
    stddev: Option<f64>,
}

impl BenchmarkRecord {
    /// Create a record for the run `run_name`.
    ///
    /// # Errors
    /// Returns [`ReportError::MalformedName`] if `run_name` cannot be parsed.
    pub fn new(
        run_name: impl Into<String>,
        iterations: u64,
        real_time: f64,
        cpu_time: f64,
        unit: TimeUnit,
    ) -> Result<Self, ReportError> {
        let run_name = run_name.into();
        let name = name::parse(&run_name)?;
        let full_name = name::full_name(&run_name).to_owned();

        Ok(Self {
            run_name,
            full_name,
            name,
            iterations,
            real_time,
            cpu_time,
            unit,
            mean: None,
            mean_iterations: None,
            median: None,
            stddev: None,
        })
    }

    /// Create the canonical record of `raw`'s run.
    ///
    /// # Errors
    /// Returns [`ReportError::MalformedName`] if the run name cannot be parsed.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, ReportError> {
        Self::new(
            raw.run_name(),
            raw.iterations,
            raw.real_time,
            raw.cpu_time,
            raw.time_unit,
        )
    }

    //------------------------------------------------ Statistics
    /// Set the mean and the repetition count it was computed over.
    ///
    /// The primary [`Self::iterations`] is left untouched.
    pub const fn attach_mean(&mut self, value: f64, iterations: u64) {
        self.mean = Some(value);
        self.mean_iterations = Some(iterations);
    }

    /// Set the median, which then replaces `cpu_time` in [`Self::value`].
    pub const fn attach_median(&mut self, value: f64) {
        self.median = Some(value);
    }

    pub const fn attach_stddev(&mut self, value: f64) {
        self.stddev = Some(value);
    }

    //------------------------------------------------ Derived values
    /// The raw cost of one iteration, the median if known, else `cpu_time`.
    pub fn cost(&self) -> f64 {
        self.median.unwrap_or(self.cpu_time)
    }

    /// The value plotted for this record.
    ///
    /// For global timing benchmarks this is [`Self::cost`], for all
    /// others it is the cost divided by the input size. A size of `0`
    /// leaves the cost un-normalized.
    pub fn value(&self, descriptions: &Descriptions) -> f64 {
        if descriptions.is_global_timing(&self.name.base_name) || self.name.size == 0 {
            return self.cost();
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "benchmark sizes are far below 2^53"
        )]
        let size = self.name.size as f64;

        self.cost() / size
    }

    /// The label of the value axis.
    ///
    /// A configured legend wins, otherwise the time unit is
    /// spelled out per operation or per element.
    pub fn legend(&self, descriptions: &Descriptions) -> String {
        let description = descriptions.get(&self.name.base_name);

        if let Some(legend) = description.and_then(|d| d.legend.as_ref()) {
            return legend.clone();
        }

        let per = if description.is_some_and(|d| d.global_timing) {
            "operation"
        } else {
            "element"
        };

        format!("{} per {per}", self.unit.long_name())
    }

    //------------------------------------------------ Getters
    /// The full run name, e.g. `Insert_Random<int64_t, int64_t, C>/1000`.
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// The run name without the size, e.g. `Insert_Random<int64_t, int64_t, C>`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn base_name(&self) -> &str {
        &self.name.base_name
    }

    pub fn type_params(&self) -> &[String] {
        &self.name.type_params
    }

    pub const fn size(&self) -> u64 {
        self.name.size
    }

    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    pub const fn real_time(&self) -> f64 {
        self.real_time
    }

    pub const fn cpu_time(&self) -> f64 {
        self.cpu_time
    }

    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub const fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// The repetition count of the `mean` aggregate.
    pub const fn mean_iterations(&self) -> Option<u64> {
        self.mean_iterations
    }

    pub const fn median(&self) -> Option<f64> {
        self.median
    }

    pub const fn stddev(&self) -> Option<f64> {
        self.stddev
    }
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name: {}, params: {:?}, size_per_iter: {}, iter: {}, real_time: {:.6}, cpu_time: {:.6}, unit: {}}}",
            self.name.base_name,
            self.name.type_params,
            self.name.size,
            self.iterations,
            self.real_time,
            self.cpu_time,
            self.unit,
        )
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Description;

    fn record(run_name: &str, cpu_time: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(run_name, 10, cpu_time + 1.0, cpu_time, TimeUnit::Ns).unwrap()
    }

    #[test]
    fn identity() {
        let r = record("Insert_Random<int64_t, int64_t, std::unordered_map>/1000", 1.0);
        assert_eq!(r.run_name(), "Insert_Random<int64_t, int64_t, std::unordered_map>/1000");
        assert_eq!(r.full_name(), "Insert_Random<int64_t, int64_t, std::unordered_map>");
        assert_eq!(r.base_name(), "Insert_Random");
        assert_eq!(r.type_params(), ["int64_t", "int64_t", "std::unordered_map"]);
        assert_eq!(r.size(), 1000);
        assert_eq!(r.iterations(), 10);
        assert_eq!(r.mean(), None);
        assert_eq!(r.median(), None);
        assert_eq!(r.stddev(), None);
    }

    #[test]
    fn malformed_run_name() {
        let result = BenchmarkRecord::new("NoAngleBracket/10", 1, 1.0, 1.0, TimeUnit::Ns);
        assert!(matches!(result, Err(ReportError::MalformedName { .. })));
    }

    #[test]
    fn statistics_last_write_wins() {
        let mut r = record("A<B, C, D>/10", 100.0);

        r.attach_mean(90.0, 5);
        r.attach_mean(80.0, 6);
        r.attach_median(70.0);
        r.attach_median(60.0);
        r.attach_stddev(2.0);
        r.attach_stddev(3.0);

        assert_eq!(r.mean(), Some(80.0));
        assert_eq!(r.mean_iterations(), Some(6));
        assert_eq!(r.iterations(), 10);
        assert_eq!(r.median(), Some(60.0));
        assert_eq!(r.stddev(), Some(3.0));
        assert_eq!(r.cost(), 60.0);
    }

    #[test]
    fn value_normalizes_by_size() {
        let descriptions = Descriptions::hashmap();
        let mut r = record("Insert_Random<int64_t, int64_t, C>/1000", 49_000.0);
        assert_eq!(r.value(&descriptions), 49.0);

        r.attach_median(50_000.0);
        assert_eq!(r.value(&descriptions), 50.0);
    }

    #[test]
    fn value_global_timing() {
        let descriptions = Descriptions::hashmap();
        let mut r = record("Rehash<int64_t, int64_t, C>/1000", 49_000.0);
        assert_eq!(r.value(&descriptions), 49_000.0);

        r.attach_median(12.5);
        assert_eq!(r.value(&descriptions), 12.5);
    }

    #[test]
    fn value_substring_is_not_global() {
        let descriptions = Descriptions::hashmap();
        let r = record("BM_Rehash<int64_t, int64_t, C>/1000", 49_000.0);
        assert_eq!(r.value(&descriptions), 49.0);
    }

    #[test]
    fn value_zero_size() {
        let r = record("Insert_Random<int64_t, int64_t, C>/0", 42.0);
        assert_eq!(r.value(&Descriptions::new()), 42.0);
    }

    #[test]
    fn legend() {
        let mut descriptions = Descriptions::hashmap();
        descriptions.insert(Description {
            global_timing: true,
            ..Description::new("Find_Miss")
        });

        let per_element = record("Insert_Random<int64_t, int64_t, C>/1000", 1.0);
        let per_operation = record("Find_Miss<int64_t, int64_t, C>/1000", 1.0);
        let custom = record("Insert_Erase_Random<int64_t, C>/1000", 1.0);
        let micros = BenchmarkRecord::new("Rehash<int64_t, int64_t, C>/1", 1, 1.0, 1.0, TimeUnit::Us)
            .unwrap();

        assert_eq!(per_element.legend(&descriptions), "nanoseconds per element");
        assert_eq!(per_operation.legend(&descriptions), "nanoseconds per operation");
        assert_eq!(
            custom.legend(&descriptions),
            "nanoseconds per element / operation"
        );
        assert_eq!(micros.legend(&descriptions), "microseconds per operation");
    }

    #[test]
    fn display() {
        let r = BenchmarkRecord::new(
            "BM_Insert_Random<int64_t, int64_t, std::unordered_map>/1000",
            17959,
            39503.851_248,
            39102.234_367,
            TimeUnit::Ns,
        )
        .unwrap();

        assert_eq!(
            r.to_string(),
            r#"{name: BM_Insert_Random, params: ["int64_t", "int64_t", "std::unordered_map"], size_per_iter: 1000, iter: 17959, real_time: 39503.851248, cpu_time: 39102.234367, unit: ns}"#
        );
    }
}
