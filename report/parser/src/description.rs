//! Benchmark descriptions.
//!
//! A [`Description`] attaches display text to a benchmark base name and
//! decides how its records are normalized, see [`BenchmarkRecord::value`](crate::BenchmarkRecord::value).
//!
//! Base names are matched exactly, a description for `Rehash` does not
//! apply to `BM_Rehash_Large`.

//---------------------------------------------------------------------------------------------------- Use
use indexmap::{map, IndexMap};
use serde::{Deserialize, Serialize};

//---------------------------------------------------------------------------------------------------- Description
/// The description of one benchmark base name.
///
/// Every field other than `name` is optional in a config file:
///
/// | Field           | Default |
/// |-----------------|---------|
/// | `global_timing` | `false`
/// | `description`   | `""`
/// | `details`       | `""`
/// | `legend`        | none, derived from the time unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Description {
    /// The benchmark base name this describes.
    ///
    /// Inside [`Descriptions`] this is the table key.
    #[serde(skip)]
    pub name: String,

    /// If `true`, the cost is reported per operation instead of
    /// being divided by the input size.
    pub global_timing: bool,

    /// A short title.
    pub description: String,

    /// A longer explanation of what is measured.
    pub details: String,

    /// A custom legend for the value axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
}

impl Description {
    /// Create a [`Description`] with every other field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

//---------------------------------------------------------------------------------------------------- Descriptions
/// Descriptions keyed by benchmark base name.
///
/// ```rust
/// use benchplot_parser::{Description, Descriptions};
///
/// let mut descriptions = Descriptions::new();
/// descriptions.insert(Description {
///     global_timing: true,
///     ..Description::new("Rehash")
/// });
///
/// assert!(descriptions.is_global_timing("Rehash"));
/// assert!(!descriptions.is_global_timing("Rehash_Large"));
/// assert!(!descriptions.is_global_timing("Insert_Random"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Description>",
    into = "IndexMap<String, Description>"
)]
pub struct Descriptions(IndexMap<String, Description>);

impl Descriptions {
    /// An empty table, every benchmark is normalized by size.
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptions of the hash-map benchmark suite.
    pub fn hashmap() -> Self {
        [
            Description {
                description: "Sequential insert".into(),
                details: "Sequential insertion in a hashmap. We generate a sequence of n consecutive \
                    keys from [0,n[ and insert them in order. The benchmark reserves the memory to \
                    avoid noise due to the rehashing policy of the hashmap."
                    .into(),
                ..Description::new("Insert_Sequential")
            },
            Description {
                global_timing: true,
                description: "Rehash benchmark".into(),
                details: "Measures the time taken to insert an element which leads to a rehash. \
                    The test inserts until the reserved size and then continues until a costly \
                    insert happens. Most hashmaps do not support an unconditional rehash so this \
                    is an approximation."
                    .into(),
                ..Description::new("Rehash")
            },
            Description {
                description: "Random insert and erase of elements".into(),
                details: "Generates 2*n events, n inserts and the n matching erases, shuffled such \
                    that an erase always happens after its insert. Between the insert and erase \
                    of a key there is a random number of other inserts and erases."
                    .into(),
                legend: Some("nanoseconds per element / operation".into()),
                ..Description::new("Insert_Erase_Random")
            },
        ]
        .into_iter()
        .collect()
    }

    /// Insert a description keyed by its name, returning the one it replaced.
    pub fn insert(&mut self, description: Description) -> Option<Description> {
        self.0.insert(description.name.clone(), description)
    }

    /// The description of `base_name`, if any.
    pub fn get(&self, base_name: &str) -> Option<&Description> {
        self.0.get(base_name)
    }

    /// Returns `true` if `base_name` is configured to report un-normalized cost.
    pub fn is_global_timing(&self, base_name: &str) -> bool {
        self.get(base_name).is_some_and(|d| d.global_timing)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the descriptions in insertion order.
    pub fn iter(&self) -> map::Values<'_, String, Description> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a Descriptions {
    type Item = &'a Description;
    type IntoIter = map::Values<'a, String, Description>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Description> for Descriptions {
    fn from_iter<I: IntoIterator<Item = Description>>(iter: I) -> Self {
        let mut this = Self::new();
        for description in iter {
            this.insert(description);
        }
        this
    }
}

impl From<IndexMap<String, Description>> for Descriptions {
    /// The table key is the description's name.
    fn from(map: IndexMap<String, Description>) -> Self {
        Self(
            map.into_iter()
                .map(|(name, mut description)| {
                    description.name.clone_from(&name);
                    (name, description)
                })
                .collect(),
        )
    }
}

impl From<Descriptions> for IndexMap<String, Description> {
    fn from(descriptions: Descriptions) -> Self {
        descriptions.0
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hashmap_defaults() {
        let descriptions = Descriptions::hashmap();
        assert_eq!(descriptions.len(), 3);

        assert!(descriptions.is_global_timing("Rehash"));
        assert!(!descriptions.is_global_timing("Insert_Sequential"));
        assert!(!descriptions.is_global_timing("Insert_Erase_Random"));

        let insert_erase = descriptions.get("Insert_Erase_Random").unwrap();
        assert_eq!(insert_erase.name, "Insert_Erase_Random");
        assert_eq!(
            insert_erase.legend.as_deref(),
            Some("nanoseconds per element / operation")
        );
    }

    #[test]
    fn exact_match_only() {
        let descriptions = Descriptions::hashmap();
        assert!(!descriptions.is_global_timing("BM_Rehash"));
        assert!(!descriptions.is_global_timing("rehash"));
        assert!(!descriptions.is_global_timing("Rehash_Cost"));
        assert!(descriptions.get("Unknown").is_none());
    }

    #[test]
    fn names_come_from_keys() {
        let descriptions: Descriptions = serde_json::from_str(
            r#"{
                "Rehash": { "global_timing": true, "description": "Rehash benchmark" },
                "Find_Miss": {}
            }"#,
        )
        .unwrap();

        let names = descriptions.iter().map(|d| d.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Rehash", "Find_Miss"]);

        let find_miss = descriptions.get("Find_Miss").unwrap();
        assert_eq!(find_miss, &Description::new("Find_Miss"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = serde_json::from_str::<Descriptions>(r#"{"Rehash": {"global": true}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn insert_replaces() {
        let mut descriptions = Descriptions::new();
        assert!(descriptions.is_empty());
        assert_eq!(descriptions.insert(Description::new("A")), None);

        let old = descriptions.insert(Description {
            global_timing: true,
            ..Description::new("A")
        });
        assert_eq!(old, Some(Description::new("A")));
        assert!(descriptions.is_global_timing("A"));
    }
}
