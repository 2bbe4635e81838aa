//! JSON Pointer (RFC 6901) paths for locating a property inside a schema.
//!
//! The flattener reports the location of a malformed property with one of
//! these. Segments are `/`-separated, with `~` escaped as `~0` and `/` as `~1`.

/// `path` extended by `segment`, escaped per RFC 6901.
#[must_use]
pub fn format(path: &str, segment: &str) -> String {
    let mut result: String = String::with_capacity(path.len() + segment.len() + 1);
    result.push_str(path);
    result.push('/');
    for c in segment.chars() {
        match c {
            '~' => result.push_str("~0"),
            '/' => result.push_str("~1"),
            other => result.push(other),
        }
    }
    result
}

/// Pointer to property `key` of the object schema located at `schema_path`.
#[must_use]
pub fn property(schema_path: &str, key: &str) -> String {
    format(&format(schema_path, "properties"), key)
}
