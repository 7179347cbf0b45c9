//! [`Benchmarks`].

//---------------------------------------------------------------------------------------------------- Use
use indexmap::{map, IndexMap};
use serde::Serialize;

use crate::BenchmarkRecord;

//---------------------------------------------------------------------------------------------------- Benchmarks
/// Resolved records grouped by full name.
///
/// - Key = full name (base name + type parameters, no size)
/// - Value = records in first-seen order
///
/// Keys iterate in first-seen order as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Benchmarks(IndexMap<String, Vec<BenchmarkRecord>>);

impl Benchmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to its full name's sequence, returning its index in it.
    pub(crate) fn push(&mut self, record: BenchmarkRecord) -> usize {
        let records = self.0.entry(record.full_name().to_owned()).or_default();
        records.push(record);
        records.len() - 1
    }

    /// The record at `index` of `full_name`'s sequence.
    pub(crate) fn get_mut(&mut self, full_name: &str, index: usize) -> Option<&mut BenchmarkRecord> {
        self.0.get_mut(full_name)?.get_mut(index)
    }

    /// Appends `other`'s records after the existing ones, key by key.
    ///
    /// Keys only present in `other` are added after the existing keys.
    pub fn merge(&mut self, other: Self) {
        for (full_name, records) in other.0 {
            self.0.entry(full_name).or_default().extend(records);
        }
    }

    /// The records of `full_name`.
    pub fn get(&self, full_name: &str) -> Option<&[BenchmarkRecord]> {
        self.0.get(full_name).map(Vec::as_slice)
    }

    /// The number of full names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The total number of records across all full names.
    pub fn record_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> map::Keys<'_, String, Vec<BenchmarkRecord>> {
        self.0.keys()
    }

    pub fn iter(&self) -> map::Iter<'_, String, Vec<BenchmarkRecord>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Benchmarks {
    type Item = (&'a String, &'a Vec<BenchmarkRecord>);
    type IntoIter = map::Iter<'a, String, Vec<BenchmarkRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Benchmarks {
    type Item = (String, Vec<BenchmarkRecord>);
    type IntoIter = map::IntoIter<String, Vec<BenchmarkRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Vec<BenchmarkRecord>)> for Benchmarks {
    fn from_iter<I: IntoIterator<Item = (String, Vec<BenchmarkRecord>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
