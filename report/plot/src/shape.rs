//! The naming convention locating the implementation under test.

/// The two benchmark name shapes of the hash-map suite.
///
/// The implementation under test is always the last type parameter, the
/// other parameters become part of the plot key. This is a naming
/// convention of the benchmarks, not something the names encode, so any
/// other parameter count is rejected instead of guessed.
///
/// ```rust
/// use benchplot_plot::BenchmarkShape;
///
/// let params = ["int64_t".to_owned(), "int64_t".to_owned(), "std::unordered_map".to_owned()];
/// assert_eq!(BenchmarkShape::detect(&params), Some(BenchmarkShape::MapLike));
/// assert_eq!(BenchmarkShape::detect(&params[1..]), Some(BenchmarkShape::ActionWrapped));
/// assert_eq!(BenchmarkShape::detect(&params[..1]), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BenchmarkShape {
    /// `Name<Key, Value, Implementation>`.
    MapLike,
    /// `Name<Value, Implementation>`, the implementation stores `Action<Value>`s.
    ActionWrapped,
}

impl BenchmarkShape {
    /// Detect the shape from the number of type parameters.
    pub const fn detect(type_params: &[String]) -> Option<Self> {
        match type_params.len() {
            3 => Some(Self::MapLike),
            2 => Some(Self::ActionWrapped),
            _ => None,
        }
    }

    /// The type parameters of the container, without the implementation.
    ///
    /// `type_params` must match this shape, see [`Self::detect`].
    fn container_params(self, type_params: &[String]) -> String {
        match self {
            Self::MapLike => format!("<{}, {}>", type_params[0], type_params[1]),
            Self::ActionWrapped => format!("<{0}, Action<{0}>>", type_params[0]),
        }
    }

    /// The implementation under test, e.g. `std::unordered_map`.
    fn implementation(self, type_params: &[String]) -> &str {
        match self {
            Self::MapLike => &type_params[2],
            Self::ActionWrapped => &type_params[1],
        }
    }

    /// The part of the plot key after the base name.
    ///
    /// `type_params` must match this shape, see [`Self::detect`].
    pub(crate) fn key_suffix(self, type_params: &[String]) -> String {
        self.container_params(type_params)
    }

    /// The trace name, the implementation with the container parameters.
    ///
    /// `type_params` must match this shape, see [`Self::detect`].
    pub(crate) fn trace_label(self, type_params: &[String]) -> String {
        format!(
            "{}{}",
            self.implementation(type_params),
            self.container_params(type_params)
        )
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params(params: &[&str]) -> Vec<String> {
        params.iter().map(|p| (*p).to_owned()).collect()
    }

    #[test]
    fn map_like() {
        let params = params(&["int64_t", "int64_t", "std::unordered_map"]);
        let shape = BenchmarkShape::detect(&params).unwrap();

        assert_eq!(shape, BenchmarkShape::MapLike);
        assert_eq!(shape.key_suffix(&params), "<int64_t, int64_t>");
        assert_eq!(shape.trace_label(&params), "std::unordered_map<int64_t, int64_t>");
    }

    #[test]
    fn action_wrapped() {
        let params = params(&["int64_t", "tsl::robin_map"]);
        let shape = BenchmarkShape::detect(&params).unwrap();

        assert_eq!(shape, BenchmarkShape::ActionWrapped);
        assert_eq!(shape.key_suffix(&params), "<int64_t, Action<int64_t>>");
        assert_eq!(
            shape.trace_label(&params),
            "tsl::robin_map<int64_t, Action<int64_t>>"
        );
    }

    /// Only 2 or 3 parameters have a shape, so nothing else reaches the indexing helpers.
    #[test]
    fn other_counts_have_no_shape() {
        for count in [0, 1, 4, 5] {
            let params = vec!["int64_t".to_owned(); count];
            assert_eq!(BenchmarkShape::detect(&params), None);
        }
    }
}
