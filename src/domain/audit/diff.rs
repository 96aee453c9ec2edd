// src/domain/audit/diff.rs
//! Change detection between two record snapshots.

use serde::Serialize;
use serde_json::{Map, Value};

/// JSON snapshot of a record, keys in declaration order. Records that fail
/// to serialize (never the case for the flat domain types) yield `Null`.
pub fn snapshot<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

/// Names of the fields of `new` whose value differs from the same field in
/// `old`, in `new`'s key order. Fields only present in `old` are ignored; a
/// field missing from `old` counts as changed. Comparison is strict value
/// equality on the flat snapshot, no deep merging.
pub fn changed_fields(old: &Value, new: &Value) -> Vec<String> {
    let empty = Map::new();
    let old = old.as_object().unwrap_or(&empty);
    let Some(new) = new.as_object() else {
        return Vec::new();
    };

    new.iter()
        .filter(|&(key, value)| old.get(key) != Some(value))
        .map(|(key, _)| key.clone())
        .collect()
}
