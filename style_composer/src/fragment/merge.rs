//! Deep-merge mechanics shared by fragments and the merge engine.

use serde_json::{Map, Value};

/// Overlay `incoming` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When merging an object into a non-object target, the target is
///   initialised to `{}` first, so the incoming object replaces it.
/// - Objects are merged recursively (keys are added or overwritten, and
///   nested objects are overlaid).
/// - Scalars replace `target` wholesale.
///
/// # Examples
///
/// ```rust
/// use style_composer::fragment::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"color": "red", "&:hover": {"color": "blue"}});
/// merge_value(&mut acc, json!({"&:hover": {"opacity": 0.5}, "margin": 0}));
/// assert_eq!(
///     acc,
///     json!({"color": "red", "&:hover": {"color": "blue", "opacity": 0.5}, "margin": 0})
/// );
/// ```
pub fn merge_value(target: &mut Value, incoming: Value) {
    match incoming {
        Value::Object(map) => merge_object(target, map),
        _ => *target = incoming,
    }
}

/// Merge `incoming` into an existing map, key by key.
pub(crate) fn merge_map(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

fn merge_object(target: &mut Value, map: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };
    merge_map(target_map, map);
}
