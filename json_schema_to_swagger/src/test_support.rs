//! Helpers shared by unit tests.

use serde_json::{Map, Value, json};

/// Property key used at nesting `level` by [`nested_properties`].
pub fn level_key(level: usize) -> String {
    format!("level{level}")
}

/// `{"level0": ...}` wrapping `leaf` in `depth` levels of object schemas. The
/// schema at level `n` holds its child under `level{n+1}` and carries a
/// draft-03 `id`.
pub fn nested_properties(depth: usize, leaf: Value) -> Value {
    let mut schema: Value = leaf;
    for level in (0..depth).rev() {
        let mut properties: Map<String, Value> = Map::new();
        properties.insert(level_key(level + 1), schema);
        let mut node: Map<String, Value> = Map::new();
        node.insert("type".to_string(), json!("object"));
        node.insert("id".to_string(), json!("x"));
        node.insert("properties".to_string(), Value::Object(properties));
        schema = Value::Object(node);
    }
    let mut properties: Map<String, Value> = Map::new();
    properties.insert(level_key(0), schema);
    Value::Object(properties)
}

/// Drop a deep value without recursing; `Value`'s own drop glue is recursive.
pub fn drop_iteratively(value: Value) {
    let mut pending: Vec<Value> = vec![value];
    while let Some(mut next) = pending.pop() {
        match &mut next {
            Value::Object(map) => pending.extend(std::mem::take(map).into_iter().map(|(_, v)| v)),
            Value::Array(items) => pending.append(items),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}
