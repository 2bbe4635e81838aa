//! Insertion-ordered store of the definitions extracted from one schema.

use serde_json::{Map, Value};

/// Definitions collected while flattening a single schema, keyed by unique name.
///
/// Iteration follows first insertion; overwriting an existing name keeps its
/// original position.
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    definitions: Map<String, Value>,
}

impl DefinitionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` under `name`, replacing any previous entry of that name.
    pub fn insert(&mut self, name: impl Into<String>, node: Value) {
        self.definitions.insert(name.into(), node);
    }

    /// `base` if it is free, otherwise `base` followed by as many `_` as it
    /// takes to reach a free name.
    #[must_use]
    pub fn allocate_name(&self, base: &str) -> String {
        let mut name: String = base.to_string();
        while self.definitions.contains_key(&name) {
            name.push('_');
        }
        name
    }

    /// Allocate a name from `base` and claim it with a `null` placeholder, so
    /// that allocations made before the definition is filled in avoid it.
    pub fn reserve(&mut self, base: &str) -> String {
        let name: String = self.allocate_name(base);
        self.definitions.insert(name.clone(), Value::Null);
        name
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.definitions.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// The Swagger `definitions` object.
    #[must_use]
    pub fn into_definitions(self) -> Map<String, Value> {
        self.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn allocate_name_returns_base_when_free() {
        let registry: DefinitionRegistry = DefinitionRegistry::new();
        assert_eq!("item", registry.allocate_name("item"));
    }

    #[test]
    fn allocate_name_appends_underscores_until_free() {
        let mut registry: DefinitionRegistry = DefinitionRegistry::new();
        registry.insert("item", json!({}));
        registry.insert("item_", json!({}));
        assert_eq!("item__", registry.allocate_name("item"));
    }

    #[test]
    fn reserve_claims_name_for_later_siblings() {
        let mut registry: DefinitionRegistry = DefinitionRegistry::new();
        let first: String = registry.reserve("item");
        let second: String = registry.reserve("item");
        assert_eq!(("item".to_string(), "item_".to_string()), (first, second));
        assert_eq!(Some(&Value::Null), registry.get("item_"));
    }

    #[test]
    fn insert_overwrite_keeps_position() {
        let mut registry: DefinitionRegistry = DefinitionRegistry::new();
        registry.insert("a", json!(1));
        registry.insert("b", json!(2));
        registry.insert("a", json!(3));
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(vec!["a", "b"], names);
        assert_eq!(Some(&json!(3)), registry.get("a"));
        assert_eq!(2, registry.len());
    }

    #[test]
    fn into_definitions_preserves_order() {
        let mut registry: DefinitionRegistry = DefinitionRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.insert(name, json!({ "title": name }));
        }
        let definitions: Map<String, Value> = registry.into_definitions();
        let names: Vec<&str> = definitions.keys().map(String::as_str).collect();
        assert_eq!(vec!["zeta", "alpha", "mid"], names);
    }
}
