//! The report written by `benchplot`.
use serde::Serialize;
use tracing::info;

use benchplot_parser::{merge_all, Descriptions, RunContext};
use benchplot_plot::{group, GroupError, PlotGroups};

use crate::load::Source;

/// The [`RunContext`] of one input source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SourceContext {
    /// The file name, or `stdin`.
    pub(crate) source: String,
    pub(crate) context: Option<RunContext>,
}

/// Everything needed to draw the charts.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    /// One entry per source, in load order.
    pub(crate) contexts: Vec<SourceContext>,
    pub(crate) descriptions: &'a Descriptions,
    pub(crate) groups: PlotGroups,
}

impl<'a> Report<'a> {
    /// Merge `sources` in order and group the result.
    ///
    /// # Errors
    /// See [`group`].
    pub(crate) fn new(
        sources: Vec<Source>,
        descriptions: &'a Descriptions,
    ) -> Result<Self, GroupError> {
        let mut contexts = Vec::with_capacity(sources.len());

        let benchmarks = merge_all(sources.into_iter().map(|source| {
            contexts.push(SourceContext {
                source: source.name,
                context: source.context,
            });
            source.benchmarks
        }));

        let groups = group(&benchmarks, descriptions)?;
        info!(
            "{} benchmarks from {} sources in {} plot groups",
            benchmarks.len(),
            contexts.len(),
            groups.len()
        );

        Ok(Self {
            contexts,
            descriptions,
            groups,
        })
    }
}
