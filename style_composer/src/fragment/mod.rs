//! Style fragments: insertion-ordered nested mappings of style properties.
//!
//! A fragment is the unit every declaration carries and the shape the merge
//! engine produces. Values are strings, numbers, or nested mappings (for
//! nested selectors and blocks). Fragments are schema-agnostic; the only
//! validation happens at the [`Fragment::from_value`] boundary, which
//! rejects JSON shapes no style object can hold.
//!
//! # Example
//!
//! ```rust
//! use style_composer::Fragment;
//! use serde_json::json;
//!
//! let mut base = Fragment::from_value(json!({"color": "red", "&:hover": {"color": "blue"}}))?;
//! base.merge(Fragment::new().with("padding", 4));
//! assert_eq!(base.get("padding"), Some(&json!(4)));
//! # Ok::<_, std::sync::Arc<style_composer::StyleError>>(())
//! ```

mod merge;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{StyleError, StyleResult, StyleResultExt};

pub use merge::merge_value;

const EXPECTED_ROOT: &str = "object";
const EXPECTED_LEAF: &str = "string, number or object";

/// Nested mapping from style property names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Fragment(Map<String, Value>);

impl Fragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Validate `value` and wrap it as a fragment.
    ///
    /// The root must be an object and every leaf a string or number.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidFragment`] naming the first offending path.
    pub fn from_value(value: Value) -> StyleResult<Self> {
        Self::try_from(value).into_style()
    }

    /// Builder-style insertion of a single property.
    ///
    /// The value is taken as-is; callers composing fragments in code are
    /// trusted to supply style-shaped values.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Deep-merge `incoming` over `self`.
    ///
    /// Nested mappings merge recursively; any other incoming value replaces
    /// what was there.
    pub fn merge(&mut self, incoming: Self) {
        merge::merge_map(&mut self.0, incoming.0);
    }

    /// Look up a top-level property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the fragment declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the fragment, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Consume the fragment, returning a JSON object for the host.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Fragment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        fragment.into_value()
    }
}

impl TryFrom<Value> for Fragment {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => {
                validate_map(&map, "$")?;
                Ok(Self(map))
            }
            other => Err(StyleError::invalid_fragment(
                "$",
                EXPECTED_ROOT,
                kind_of(&other),
            )),
        }
    }
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

fn validate_map(map: &Map<String, Value>, path: &str) -> Result<(), StyleError> {
    for (key, value) in map {
        let child = format!("{path}.{key}");
        match value {
            Value::Object(nested) => validate_map(nested, &child)?,
            Value::String(_) | Value::Number(_) => {}
            other => {
                return Err(StyleError::invalid_fragment(
                    child,
                    EXPECTED_LEAF,
                    kind_of(other),
                ));
            }
        }
    }
    Ok(())
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
