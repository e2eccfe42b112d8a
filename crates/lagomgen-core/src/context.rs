//! Template context assembly and JSON-blob merging
//!
//! The context is built once per invocation from prompt answers, then
//! optionally overridden by caller-supplied JSON blobs (a pre-built context
//! and a "miscellaneous options" object). The copier never mutates it.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while merging a caller-supplied JSON blob into a context
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context blob is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("context blob must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("context field '{0}' has unsupported type {1} (only strings, numbers, booleans and null are accepted)")]
    UnsupportedValue(String, &'static str),
}

/// Field-name to string-value mapping substituted into templates.
///
/// Fields absent from the context render as the empty string (the engine's
/// non-strict default), so templates may reference fields the caller never
/// supplied.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    fields: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merge a JSON object blob into the context. Blob fields override
    /// existing fields; scalar values are stringified, `null` becomes the
    /// empty string, nested arrays/objects are rejected.
    pub fn merge_json(&mut self, blob: &str) -> Result<(), ContextError> {
        let value: serde_json::Value = serde_json::from_str(blob)?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(ContextError::NotAnObject(json_type_name(&other))),
        };

        for (name, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                nested => {
                    return Err(ContextError::UnsupportedValue(name, json_type_name(&nested)))
                }
            };
            self.fields.insert(name, text);
        }

        Ok(())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let context = TemplateContext::new()
            .with("name", "hello")
            .with("organization", "com.example");

        assert_eq!(context.get("name"), Some("hello"));
        assert_eq!(context.get("organization"), Some("com.example"));
        assert_eq!(context.get("missing"), None);
    }

    #[test]
    fn test_merge_json_overrides_existing_fields() {
        let mut context = TemplateContext::new().with("name", "hello");
        context
            .merge_json(r#"{"name": "world", "version": "2.0"}"#)
            .unwrap();

        assert_eq!(context.get("name"), Some("world"));
        assert_eq!(context.get("version"), Some("2.0"));
    }

    #[test]
    fn test_merge_json_stringifies_scalars() {
        let mut context = TemplateContext::new();
        context
            .merge_json(r#"{"port": 9000, "debug": true, "empty": null}"#)
            .unwrap();

        assert_eq!(context.get("port"), Some("9000"));
        assert_eq!(context.get("debug"), Some("true"));
        assert_eq!(context.get("empty"), Some(""));
    }

    #[test]
    fn test_merge_json_rejects_non_object_blob() {
        let mut context = TemplateContext::new();
        let err = context.merge_json(r#"["not", "an", "object"]"#).unwrap_err();
        assert!(matches!(err, ContextError::NotAnObject("array")));
    }

    #[test]
    fn test_merge_json_rejects_nested_values() {
        let mut context = TemplateContext::new();
        let err = context.merge_json(r#"{"nested": {"a": 1}}"#).unwrap_err();
        assert!(matches!(err, ContextError::UnsupportedValue(_, "object")));
    }

    #[test]
    fn test_merge_json_rejects_malformed_json() {
        let mut context = TemplateContext::new();
        assert!(matches!(
            context.merge_json("{not json"),
            Err(ContextError::Parse(_))
        ));
    }
}
