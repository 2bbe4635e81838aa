//! Loose scalar readings of JSON values, used where schema keywords are
//! compared textually (`type`, `maximum`, `javaType`) or read as flags
//! (`additionalProperties`).

use serde_json::Value;

/// Text of a value: string contents, canonical number or boolean text,
/// `null` for null, and the empty string for arrays and objects.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Whether `value` has key `key` whose text equals `expected`.
pub fn text_eq(value: &Value, key: &str, expected: &str) -> bool {
    value.get(key).is_some_and(|v| match v {
        Value::String(s) => s == expected,
        other => as_text(other) == expected,
    })
}

/// Flag reading of a value. Schema objects and anything unrecognized are `false`.
pub fn as_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => s.trim() == "true",
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn as_text_of_large_integer_is_exact() {
        let actual: String = as_text(&json!(9_223_372_036_854_775_807_u64));
        assert_eq!("9223372036854775807", actual);
    }

    #[test]
    fn as_text_of_containers_is_empty() {
        assert_eq!("", as_text(&json!(["string", "null"])));
        assert_eq!("", as_text(&json!({})));
    }

    #[test]
    fn text_eq_matches_string_and_number() {
        let node: Value = json!({ "a": "9223372036854775807", "b": 9_223_372_036_854_775_807_i64 });
        assert!(text_eq(&node, "a", "9223372036854775807"));
        assert!(text_eq(&node, "b", "9223372036854775807"));
        assert!(!text_eq(&node, "c", "9223372036854775807"));
    }

    #[test]
    fn as_boolean_readings() {
        assert!(as_boolean(&json!(true)));
        assert!(!as_boolean(&json!(false)));
        assert!(as_boolean(&json!("true")));
        assert!(as_boolean(&json!(1)));
        assert!(!as_boolean(&json!(0)));
        assert!(!as_boolean(&json!({ "type": "string" })));
    }
}
