//! Flattens a draft-04 shaped schema into Swagger `definitions`.
//!
//! Every nested object with `properties`, directly or as the `items` of an
//! array, is moved into the registry under its own name and replaced by a
//! `$ref`. Remaining properties get the fixed keyword rewrites (number
//! formats, Java naming hints, `examples` collapse).
//!
//! Traversal is depth-first pre-order over an explicit stack of frames: a
//! definition's name is claimed before any of its children allocate, and
//! registry order is the order definitions are first reached.

use crate::coerce;
use crate::error::SwaggerGenError;
use crate::json_pointer;
use crate::naming;
use crate::registry::DefinitionRegistry;
use serde_json::{Map, Value, json};

/// `maximum` text that marks an integer property as 64-bit.
const INT64_MAXIMUM: &str = "9223372036854775807";

const JAVA_LONG: &str = "java.lang.Long";

/// Flatten `schema` into `registry`, storing the top-level definition as `root_name`.
///
/// # Errors
///
/// Returns `SwaggerGenError::MissingPropertyType` for the first property that
/// has neither `$ref` nor `type`.
pub fn flatten(
    root_name: &str,
    schema: &Value,
    registry: &mut DefinitionRegistry,
) -> Result<(), SwaggerGenError> {
    registry.insert(root_name, Value::Null);
    let mut stack: Vec<Frame<'_>> = vec![Frame::open(
        root_name.to_string(),
        schema,
        String::new(),
        registry,
    )];

    while let Some(frame) = stack.last_mut() {
        let Some((key, value)) = frame.next_property() else {
            if let Some(done) = stack.pop() {
                let (name, prepared): (String, Value) = done.finish();
                registry.insert(name, prepared);
            }
            continue;
        };

        match rewrite_property(key, value, &frame.path, registry)? {
            Rewrite::Leaf(leaf) => {
                frame.properties.insert(key.clone(), leaf);
            }
            Rewrite::Extract {
                reference,
                name,
                schema,
                path,
            } => {
                frame.properties.insert(key.clone(), reference);
                let child: Frame<'_> = Frame::open(name, schema, path, registry);
                stack.push(child);
            }
        }
    }

    Ok(())
}

/// A definition being filled in.
struct Frame<'a> {
    name: String,
    schema: &'a Value,
    /// JSON Pointer of `schema` within the document.
    path: String,
    entries: Option<serde_json::map::Iter<'a>>,
    properties: Map<String, Value>,
}

impl<'a> Frame<'a> {
    /// Start a definition. Entries of the schema's own `definitions` block are
    /// copied into the registry as they are, unless the name is already taken.
    fn open(
        name: String,
        schema: &'a Value,
        path: String,
        registry: &mut DefinitionRegistry,
    ) -> Self {
        tracing::debug!(definition = %name, pointer = %path, "extracting definition");
        if let Some(definitions) = schema.get("definitions").and_then(Value::as_object) {
            for (definition_name, definition) in definitions {
                if registry.contains(definition_name) {
                    tracing::warn!(
                        definition = %definition_name,
                        "skipping source definition whose name is already taken"
                    );
                    continue;
                }
                registry.insert(definition_name.clone(), definition.clone());
            }
        }

        Self {
            name,
            schema,
            path,
            entries: schema
                .get("properties")
                .and_then(Value::as_object)
                .map(Map::iter),
            properties: Map::new(),
        }
    }

    fn next_property(&mut self) -> Option<(&'a String, &'a Value)> {
        self.entries.as_mut()?.next()
    }

    /// The prepared definition: extension flags, copied keywords, the
    /// rewritten properties, and a `title` equal to the definition name.
    fn finish(self) -> (String, Value) {
        let mut prepared: Map<String, Value> = Map::new();

        if let Some(additional) = self.schema.get("additionalProperties") {
            let allowed: bool = coerce::as_boolean(additional);
            prepared.insert(
                "x-disableAdditionalProperties".to_string(),
                Value::Bool(!allowed),
            );
            prepared.insert("x-additionalProperties".to_string(), Value::Bool(allowed));
        } else {
            prepared.insert("x-additionalProperties".to_string(), Value::Bool(true));
        }

        for keyword in ["type", "required", "description"] {
            if let Some(value) = self.schema.get(keyword) {
                prepared.insert(keyword.to_string(), value.clone());
            }
        }

        prepared.insert("properties".to_string(), Value::Object(self.properties));
        prepared.insert("title".to_string(), Value::String(self.name.clone()));

        (self.name, Value::Object(prepared))
    }
}

/// What a single property becomes in its parent definition.
enum Rewrite<'a> {
    /// Emitted in place.
    Leaf(Value),
    /// Emitted as `reference`; `schema` becomes definition `name`.
    Extract {
        reference: Value,
        name: String,
        schema: &'a Value,
        path: String,
    },
}

/// Apply the first matching rewrite rule to property `key`.
fn rewrite_property<'a>(
    key: &str,
    value: &'a Value,
    parent_path: &str,
    registry: &mut DefinitionRegistry,
) -> Result<Rewrite<'a>, SwaggerGenError> {
    if value.get("$ref").is_some() {
        return Ok(Rewrite::Leaf(value.clone()));
    }

    let path: String = json_pointer::property(parent_path, key);
    let Some(type_value) = value.get("type") else {
        return Err(SwaggerGenError::MissingPropertyType { path });
    };
    let type_name: String = coerce::as_text(type_value);

    if type_name == "object" && value.get("properties").is_some() {
        let name: String = registry.reserve(key);
        return Ok(Rewrite::Extract {
            reference: definition_ref(&name),
            name,
            schema: value,
            path,
        });
    }

    if type_name == "array"
        && let Some(items) = value.get("items")
        && coerce::text_eq(items, "type", "object")
        && items.get("properties").is_some()
    {
        let name: String = registry.reserve(&naming::to_singular_form(key));
        return Ok(Rewrite::Extract {
            reference: json!({ "type": "array", "items": definition_ref(&name) }),
            name,
            schema: items,
            path: json_pointer::format(&path, "items"),
        });
    }

    let Some(fields) = value.as_object() else {
        return Ok(Rewrite::Leaf(value.clone()));
    };

    let rewritten: Map<String, Value> = if type_name == "number" {
        with_format(fields, "double")
    } else if type_name == "integer" && coerce::text_eq(value, "maximum", INT64_MAXIMUM) {
        with_format(fields, "int64")
    } else if let Some(java_name) = fields.get("javaName") {
        with_java_name(fields, &coerce::as_text(java_name))
    } else if naming::starts_with_two_uppercase(key) {
        let mut rewritten: Map<String, Value> = fields.clone();
        rewritten.insert(
            "x-javaName".to_string(),
            Value::String(naming::two_first_underscores_to_case(key, true)),
        );
        rewritten.insert(
            "x-javaCamelName".to_string(),
            Value::String(naming::two_first_underscores_to_case(key, false)),
        );
        rewritten
    } else if fields.contains_key("examples") {
        with_first_example(fields)
    } else if coerce::text_eq(value, "javaType", JAVA_LONG) {
        as_java_long(fields)
    } else {
        return Ok(Rewrite::Leaf(value.clone()));
    };

    Ok(Rewrite::Leaf(Value::Object(rewritten)))
}

fn definition_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/definitions/{name}") })
}

fn with_format(fields: &Map<String, Value>, format: &str) -> Map<String, Value> {
    let mut rewritten: Map<String, Value> = fields.clone();
    rewritten.insert("format".to_string(), Value::String(format.to_string()));
    rewritten
}

/// Replace `javaName` with the correspondence flag and both camel-case forms.
fn with_java_name(fields: &Map<String, Value>, java_name: &str) -> Map<String, Value> {
    let mut rewritten: Map<String, Value> = Map::new();
    for (key, value) in fields {
        if key == "javaName" {
            rewritten.insert("x-addCorresponds".to_string(), Value::Bool(true));
            rewritten.insert(
                "x-javaName".to_string(),
                Value::String(naming::upper_underscore_to_lower_camel(java_name)),
            );
            rewritten.insert(
                "x-javaCamelName".to_string(),
                Value::String(naming::upper_underscore_to_upper_camel(java_name)),
            );
        } else {
            rewritten.insert(key.clone(), value.clone());
        }
    }
    rewritten
}

/// Swagger 2.0 has a single `example`; keep the first of `examples`.
fn with_first_example(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut rewritten: Map<String, Value> = Map::new();
    for (key, value) in fields {
        if key == "examples" {
            let first: Value = value.get(0).cloned().unwrap_or(Value::Null);
            rewritten.insert("example".to_string(), first);
        } else {
            rewritten.insert(key.clone(), value.clone());
        }
    }
    rewritten
}

fn as_java_long(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut rewritten: Map<String, Value> = Map::new();
    for (key, value) in fields {
        match key.as_str() {
            "type" => {
                rewritten.insert("type".to_string(), json!("integer"));
                rewritten.insert("format".to_string(), json!("int64"));
            }
            "javaType" => {}
            _ => {
                rewritten.insert(key.clone(), value.clone());
            }
        }
    }
    rewritten
}
