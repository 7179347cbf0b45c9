/// An error grouping benchmarks into plots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// The benchmark's type parameter count has no known implementation position.
    #[error("`{full_name}` has {params} type parameters, only 2 or 3 are supported")]
    UnsupportedShape {
        /// The benchmark's full name.
        full_name: String,
        /// The number of type parameters.
        params: usize,
    },
}
