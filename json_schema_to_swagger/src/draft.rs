//! Rewrites draft-03 and draft-06/07 schemas into the draft-04 shape the
//! flattener expects.
//!
//! The rewrite happens in place over an explicit work stack, so deeply nested
//! schemas do not grow the call stack.

use crate::coerce;
use serde_json::{Map, Value, json};

const DRAFT_03_URI: &str = "http://json-schema.org/draft-03/schema";
const DRAFT_04_URI: &str = "http://json-schema.org/draft-04/schema#";
const DRAFT_06_URI: &str = "http://json-schema.org/draft-06/schema#";
const DRAFT_07_URI: &str = "http://json-schema.org/draft-07/schema#";

/// Keywords whose values are copied as they are when rewriting draft-06/07.
/// They hold scalars or scalar arrays, not sub-schemas.
const VERBATIM_KEYWORDS: &[&str] = &[
    "required",
    "examples",
    "minimum",
    "maximum",
    "enum",
    "maxLength",
    "default",
];

/// JSON Schema draft named by a document's `$schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draft {
    Draft3,
    Draft4,
    Draft6,
    Draft7,
    /// Missing or unknown `$schema`; handled like draft-04.
    Unrecognized,
}

/// Which rewrite a draft needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lineage {
    Draft3,
    Draft6Or7,
}

impl Draft {
    /// Select the draft by exact match on the root `$schema` string.
    #[must_use]
    pub fn detect(schema: &Value) -> Self {
        match schema.get("$schema").and_then(Value::as_str) {
            Some(DRAFT_03_URI) => Self::Draft3,
            Some(DRAFT_04_URI) => Self::Draft4,
            Some(DRAFT_06_URI) => Self::Draft6,
            Some(DRAFT_07_URI) => Self::Draft7,
            _ => Self::Unrecognized,
        }
    }

    fn lineage(self) -> Option<Lineage> {
        match self {
            Self::Draft3 => Some(Lineage::Draft3),
            Self::Draft6 | Self::Draft7 => Some(Lineage::Draft6Or7),
            Self::Draft4 | Self::Unrecognized => None,
        }
    }
}

/// Normalize `schema` to draft-04 shape according to its `$schema`.
/// Draft-04 and unrecognized documents are returned untouched.
#[must_use]
pub fn normalize(mut schema: Value) -> Value {
    let draft: Draft = Draft::detect(&schema);
    tracing::debug!(?draft, "selected schema draft");
    if let Some(lineage) = draft.lineage() {
        rewrite(&mut schema, lineage);
    }
    schema
}

fn rewrite(root: &mut Value, lineage: Lineage) {
    let mut stack: Vec<&mut Value> = vec![root];

    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                let fields: Map<String, Value> = std::mem::take(map);
                let mut verbatim: Vec<String> = Vec::new();

                for (key, mut child) in fields {
                    let key: String = match lineage {
                        Lineage::Draft6Or7 => id_key(&child).unwrap_or(key),
                        Lineage::Draft3 => key,
                    };

                    if coerce::text_eq(&child, "type", "object") || key == "properties" {
                        // rewritten below like any other child
                    } else if coerce::text_eq(&child, "type", "array") {
                        if let Value::Object(array_schema) = &mut child
                            && !array_schema.contains_key("items")
                        {
                            array_schema.insert("items".to_string(), json!({ "type": "object" }));
                        }
                    } else if lineage == Lineage::Draft6Or7
                        && VERBATIM_KEYWORDS.contains(&key.as_str())
                    {
                        verbatim.push(key.clone());
                    } else if key == "id" || (lineage == Lineage::Draft6Or7 && key == "$id") {
                        continue;
                    }
                    map.insert(key, child);
                }

                stack.extend(
                    map.iter_mut()
                        .filter(|(key, _)| !verbatim.contains(key))
                        .map(|(_, child)| child),
                );
            }
            Value::Array(items) => stack.extend(items.iter_mut()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}

/// Last `/`-delimited segment of a child schema's `$id`, if it has one.
fn id_key(child: &Value) -> Option<String> {
    let id: String = coerce::as_text(child.get("$id")?);
    Some(id.rsplit('/').next().unwrap_or_default().to_string())
}
