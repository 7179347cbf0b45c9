//! Plot groups.

//---------------------------------------------------------------------------------------------------- Use
use indexmap::{map, IndexMap};
use serde::Serialize;
use tracing::{debug, warn};

use benchplot_parser::{BenchmarkRecord, Benchmarks, Descriptions};

use crate::{BenchmarkShape, GroupError};

//---------------------------------------------------------------------------------------------------- PlotTrace
/// One line of a chart: the values of one implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotTrace {
    /// e.g. `std::unordered_map<int64_t, int64_t>`.
    pub label: String,
    /// One value per size of the group's x-axis.
    pub values: Vec<f64>,
}

//---------------------------------------------------------------------------------------------------- PlotGroup
/// One chart, all implementations of one benchmark and container type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotGroup {
    /// The plot key, e.g. `Insert_Random<int64_t, int64_t>`.
    pub name: String,
    /// The benchmark base name, e.g. `Insert_Random`.
    pub short_name: String,
    /// The value axis label.
    pub legend: String,
    /// The input sizes.
    pub x_values: Vec<u64>,
    pub traces: Vec<PlotTrace>,
}

impl PlotGroup {
    fn add_trace(&mut self, label: String, values: Vec<f64>) {
        self.traces.push(PlotTrace { label, values });
    }
}

//---------------------------------------------------------------------------------------------------- PlotGroups
/// Plot groups keyed by plot key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlotGroups(IndexMap<String, PlotGroup>);

impl PlotGroups {
    pub fn get(&self, plot_key: &str) -> Option<&PlotGroup> {
        self.0.get(plot_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, String, PlotGroup> {
        self.0.iter()
    }

    /// The groups, in first-seen order.
    pub fn groups(&self) -> map::Values<'_, String, PlotGroup> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a PlotGroups {
    type Item = (&'a String, &'a PlotGroup);
    type IntoIter = map::Iter<'a, String, PlotGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Groups `benchmarks` by plot key.
///
/// Each full name becomes one trace of the group named by its base name and
/// non-implementation type parameters, see [`BenchmarkShape`].
///
/// - `x_values` are the sizes of the first full name of the group
/// - a trace's values are its records' [`value`](benchplot_parser::BenchmarkRecord::value), in order
///
/// # Errors
/// Returns [`GroupError::UnsupportedShape`] for a type parameter count other than 2 or 3.
pub fn group(
    benchmarks: &Benchmarks,
    descriptions: &Descriptions,
) -> Result<PlotGroups, GroupError> {
    let mut groups = IndexMap::<String, PlotGroup>::new();

    for (full_name, records) in benchmarks {
        let Some(first) = records.first() else {
            continue;
        };

        let params = first.type_params();
        let shape = BenchmarkShape::detect(params).ok_or_else(|| GroupError::UnsupportedShape {
            full_name: full_name.clone(),
            params: params.len(),
        })?;

        let plot_key = format!("{}{}", first.base_name(), shape.key_suffix(params));
        let x_values = records
            .iter()
            .map(BenchmarkRecord::size)
            .collect::<Vec<u64>>();
        let y_values = records.iter().map(|r| r.value(descriptions)).collect();

        let group = groups.entry(plot_key).or_insert_with_key(|plot_key| {
            debug!("new plot group {plot_key}");
            PlotGroup {
                name: plot_key.clone(),
                short_name: first.base_name().to_owned(),
                legend: first.legend(descriptions),
                x_values: x_values.clone(),
                traces: Vec::new(),
            }
        });

        if group.x_values != x_values {
            warn!(
                "{full_name} sizes {x_values:?} differ from the x-axis {:?} of {}",
                group.x_values, group.name
            );
        }

        group.add_trace(shape.trace_label(params), y_values);
    }

    Ok(PlotGroups(groups))
}
