//! The Swagger 2.0 document each flattened schema is stamped into.

use crate::error::SwaggerGenError;
use serde_json::{Map, Value};
use std::path::Path;

/// Template compiled into the binary, used unless another is supplied.
pub const BUILTIN_TEMPLATE: &str = include_str!("../resources/swagger.json.template");

/// A Swagger document with a single `GET /api` operation whose response,
/// tag, summary and operation id are filled in per schema.
///
/// Everything else in the document (`info`, `host`, `basePath`, parameters, other
/// responses) is carried to the output unchanged.
#[derive(Debug, Clone)]
pub struct SwaggerTemplate {
    document: Value,
}

impl SwaggerTemplate {
    /// The built-in template.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerGenError` only if the bundled template is not a valid template.
    pub fn builtin() -> Result<Self, SwaggerGenError> {
        Self::from_value(serde_json::from_str(BUILTIN_TEMPLATE)?)
    }

    /// Load a template from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerGenError::InFile` wrapping the read, parse or shape
    /// failure, named after `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SwaggerGenError> {
        let path: &Path = path.as_ref();
        let load = || -> Result<Self, SwaggerGenError> {
            let text: String = std::fs::read_to_string(path)?;
            Self::from_value(serde_json::from_str(&text)?)
        };
        load().map_err(|e| e.in_file(path.display().to_string()))
    }

    /// Use `document` as the template after checking that every location
    /// written by [`SwaggerTemplate::stamp`] is present.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerGenError::InvalidTemplate` naming the first missing location.
    pub fn from_value(document: Value) -> Result<Self, SwaggerGenError> {
        if !document.get("definitions").is_some_and(Value::is_object) {
            return Err(invalid("an object at \"definitions\""));
        }
        let get: Option<&Value> = document.pointer("/paths/~1api/get");
        for field in ["summary", "operationId"] {
            if get.and_then(|g| g.get(field)).is_none() {
                return Err(SwaggerGenError::InvalidTemplate(format!(
                    "paths[\"/api\"].get.{field}"
                )));
            }
        }

        let template: Self = Self { document };
        template.stamp(Map::new(), "")?;
        Ok(template)
    }

    /// Produce the Swagger document for one schema: `definitions` replaced by
    /// `definitions`, and the tag, operation and `200` response pointed at
    /// `root_name`.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerGenError::InvalidTemplate` if a stamped location is missing.
    pub fn stamp(
        &self,
        definitions: Map<String, Value>,
        root_name: &str,
    ) -> Result<Value, SwaggerGenError> {
        let mut document: Value = self.document.clone();
        let root: &mut Map<String, Value> = document
            .as_object_mut()
            .ok_or_else(|| invalid("a top-level object"))?;

        root.insert("definitions".to_string(), Value::Object(definitions));

        let tag: &mut Map<String, Value> = root
            .get_mut("tags")
            .and_then(|tags| tags.get_mut(0))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| invalid("an object at tags[0]"))?;
        tag.insert("name".to_string(), Value::from(root_name));
        tag.insert("description".to_string(), Value::from(root_name));

        let get: &mut Map<String, Value> = root
            .get_mut("paths")
            .and_then(|paths| paths.get_mut("/api"))
            .and_then(|api| api.get_mut("get"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| invalid("an object at paths[\"/api\"].get"))?;

        let tags: &mut Vec<Value> = get
            .get_mut("tags")
            .and_then(Value::as_array_mut)
            .filter(|tags| !tags.is_empty())
            .ok_or_else(|| invalid("a non-empty array at paths[\"/api\"].get.tags"))?;
        tags.push(Value::from(root_name));
        tags.remove(0);

        get.insert("summary".to_string(), Value::from(root_name));
        get.insert(
            "operationId".to_string(),
            Value::String(format!("{root_name}UsingGET")),
        );

        let schema: &mut Map<String, Value> = get
            .get_mut("responses")
            .and_then(|responses| responses.get_mut("200"))
            .and_then(|ok| ok.get_mut("schema"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| invalid("an object at paths[\"/api\"].get.responses[\"200\"].schema"))?;
        schema.insert(
            "$ref".to_string(),
            Value::String(format!("#/definitions/{root_name}")),
        );

        Ok(document)
    }
}

fn invalid(location: &str) -> SwaggerGenError {
    SwaggerGenError::InvalidTemplate(location.to_string())
}
