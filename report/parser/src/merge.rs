//! Combining [`Benchmarks`] from several sources.

use crate::Benchmarks;

/// Merges `other` into `target` and returns it.
///
/// For each full name of `other`:
/// - if `target` has it, `other`'s records are appended after `target`'s
/// - else the full name is added with `other`'s records as they are
///
/// Order follows the merge call order, nothing is sorted.
///
/// ```rust
/// use benchplot_parser::{merge, Benchmarks};
///
/// let merged = merge(Benchmarks::new(), Benchmarks::new());
/// assert!(merged.is_empty());
/// ```
pub fn merge(mut target: Benchmarks, other: Benchmarks) -> Benchmarks {
    target.merge(other);
    target
}

/// Merges every source, in iteration order, into one [`Benchmarks`].
pub fn merge_all<I>(sources: I) -> Benchmarks
where
    I: IntoIterator<Item = Benchmarks>,
{
    sources.into_iter().fold(Benchmarks::new(), merge)
}
