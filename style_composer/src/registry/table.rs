//! Value tables handed to variant registrations.

use crate::{DeclareOptions, Fragment};

use super::VariantEntry;

/// A single case of a [`VariantTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantCase {
    fragment: Fragment,
    options: DeclareOptions,
}

impl VariantCase {
    /// The case's fragment.
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Per-case overrides.
    #[must_use]
    pub const fn options(&self) -> DeclareOptions {
        self.options
    }
}

/// Ordered mapping from every legal value of a variant to its fragment.
///
/// # Examples
///
/// ```rust
/// use style_composer::{DeclareOptions, Fragment, VariantTable};
///
/// let table = VariantTable::new()
///     .case("default", Fragment::new())
///     .case("primary", Fragment::new().with("color", "white"))
///     .case_with(
///         "danger",
///         Fragment::new().with("color", "red"),
///         DeclareOptions::weight(5),
///     )
///     .with_weight(1);
/// assert_eq!(table.len(), 3);
/// assert!(table.contains("primary"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantTable {
    cases: Vec<(String, VariantCase)>,
    weight: Option<i32>,
}

impl VariantTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cases: Vec::new(),
            weight: None,
        }
    }

    /// Default weight for cases that do not set their own.
    #[must_use]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Add a case with default options.
    #[must_use]
    pub fn case(self, value: impl Into<String>, fragment: Fragment) -> Self {
        self.case_with(value, fragment, DeclareOptions::new())
    }

    /// Add a case with explicit weight or enablement. A repeated value
    /// replaces the earlier case in place.
    #[must_use]
    pub fn case_with(
        mut self,
        value: impl Into<String>,
        fragment: Fragment,
        options: DeclareOptions,
    ) -> Self {
        let key: String = value.into();
        let case = VariantCase { fragment, options };
        match self.cases.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = case,
            None => self.cases.push((key, case)),
        }
        self
    }

    /// Look up the case for `value`.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&VariantCase> {
        self.cases
            .iter()
            .find_map(|(key, case)| (key == value).then_some(case))
    }

    /// Returns `true` when the table has a case for `value`.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` when the table has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over `(value, case)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantCase)> {
        self.cases.iter().map(|(value, case)| (value.as_str(), case))
    }

    /// Weight applied to cases without their own.
    #[must_use]
    pub const fn default_weight(&self) -> i32 {
        match self.weight {
            Some(weight) => weight,
            None => 0,
        }
    }

    /// Resolve each case into the entry the registry stores.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, VariantEntry)> {
        let fallback = self.default_weight();
        self.cases.into_iter().map(move |(value, case)| {
            let entry = VariantEntry::new(
                case.fragment,
                case.options.resolved_weight(fallback),
                case.options.resolved_enabled(),
            );
            (value, entry)
        })
    }
}

impl<K: Into<String>> FromIterator<(K, Fragment)> for VariantTable {
    fn from_iter<I: IntoIterator<Item = (K, Fragment)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |table, (value, fragment)| table.case(value, fragment))
    }
}
