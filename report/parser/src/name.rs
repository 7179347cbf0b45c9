//! Benchmark name parsing.
//!
//! Template benchmarks are registered with names like:
//!
//! ```text
//! BM_Insert_Random<int64_t, int64_t, std::unordered_map>/1000
//! ^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^
//! base name        type parameters                       size
//! ```
//!
//! Aggregate records may carry a trailing `_mean`, `_median` or `_stddev`
//! after the size, it is not part of the size.

//---------------------------------------------------------------------------------------------------- Use
use serde::{Deserialize, Serialize};

use crate::ReportError;

//---------------------------------------------------------------------------------------------------- BenchmarkName
/// A decoded benchmark name.
///
/// ```rust
/// use benchplot_parser::BenchmarkName;
///
/// let name = BenchmarkName::parse("BM_Insert_Random<int64_t, int64_t, std::unordered_map>/1000").unwrap();
/// assert_eq!(name.base_name, "BM_Insert_Random");
/// assert_eq!(name.type_params, ["int64_t", "int64_t", "std::unordered_map"]);
/// assert_eq!(name.size, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BenchmarkName {
    /// Everything before the first `<`.
    pub base_name: String,
    /// The comma separated tokens between `<` and `>`, trimmed.
    pub type_params: Vec<String>,
    /// The input size, the integer after the `/`.
    pub size: u64,
}

impl BenchmarkName {
    /// Parses a raw benchmark name, see [`parse`].
    ///
    /// # Errors
    /// Returns [`ReportError::MalformedName`] if the name does not follow
    /// the `BaseName<Params...>/Size` shape.
    pub fn parse(raw_name: &str) -> Result<Self, ReportError> {
        parse(raw_name)
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Parses a raw benchmark name into its base name, type parameters and size.
///
/// Nested templates are not supported: the first `>` closes the list, so
/// `A<int64_t, std::vector<int>, C>/10` parses as the two parameters
/// `int64_t` and `std::vector<int`.
///
/// # Errors
/// Returns [`ReportError::MalformedName`] if:
/// - there is no `<`
/// - there is no `>` after the `<`
/// - the type parameter list (or one of its tokens) is empty
/// - there is no `/` after the `>`
/// - the `/` is not followed by a base-10 integer
pub fn parse(raw_name: &str) -> Result<BenchmarkName, ReportError> {
    let malformed = |reason| ReportError::MalformedName {
        name: raw_name.to_owned(),
        reason,
    };

    let open = raw_name.find('<').ok_or_else(|| malformed("missing `<`"))?;
    let close = raw_name[open..]
        .find('>')
        .map(|i| open + i)
        .ok_or_else(|| malformed("missing `>`"))?;

    let params = &raw_name[open + 1..close];
    if params.trim().is_empty() {
        return Err(malformed("empty type parameter list"));
    }

    let type_params = params
        .split(',')
        .map(|param| param.trim().to_owned())
        .collect::<Vec<String>>();

    if type_params.iter().any(String::is_empty) {
        return Err(malformed("empty type parameter"));
    }

    let after_params = &raw_name[close + 1..];
    let slash = after_params
        .find('/')
        .ok_or_else(|| malformed("missing `/` before the size"))?;

    // The size ends at the first non-digit, e.g. the `_mean` in `/1000_mean`.
    let size_str = &after_params[slash + 1..];
    let digits = size_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_str.len());

    let size = size_str[..digits]
        .parse::<u64>()
        .map_err(|_| malformed("size is not a base-10 integer"))?;

    Ok(BenchmarkName {
        base_name: raw_name[..open].to_owned(),
        type_params,
        size,
    })
}

/// Returns the benchmark name without its size, i.e. everything before the first `/`.
///
/// This is the key shared by every size of one benchmark.
///
/// ```rust
/// use benchplot_parser::name::full_name;
///
/// assert_eq!(
///     full_name("BM_Insert_Random<int64_t, int64_t, std::unordered_map>/1000"),
///     "BM_Insert_Random<int64_t, int64_t, std::unordered_map>",
/// );
/// assert_eq!(full_name("NoSize"), "NoSize");
/// ```
pub fn full_name(raw_name: &str) -> &str {
    raw_name
        .split_once('/')
        .map_or(raw_name, |(full_name, _)| full_name)
}
