//! Deep merge of option mappings.

use serde_json::{Map, Value};

/// Merges `overlay` onto a copy of `base`.
///
/// Nested objects present on both sides are merged recursively. Any other
/// overlay value, lists included, replaces the base value outright.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            let mut merged = base.clone();
            merge_into(&mut merged, overlay);
            Value::Object(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// In-place variant of [`deep_merge`] over two mappings.
pub fn merge_into(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
