//! OpenAPI Schema Object to JSON Schema draft-04 converter
//!
//! Walks a schema depth first, rewriting every nested schema object in place.

use serde_json::{Map, Value};
use tracing::debug;

use super::formats::convert_format;
use super::options::ConvertOptions;

/// Dialect URI stamped on every converted document
pub const DRAFT_04_SCHEMA: &str = "http://json-schema.org/draft-04/schema#";

/// Keywords whose value is a schema, or an array of schemas
const SUBSCHEMA_KEYWORDS: [&str; 6] = [
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "items",
    "additionalProperties",
];

/// `type` values JSON Schema accepts
const VALID_TYPES: [&str; 7] = ["integer", "number", "string", "boolean", "object", "array", "null"];

/// Error during schema conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Schema must be a JSON object, found {0}")]
    NotAnObject(String),
    #[error("Type {0} is not a valid type")]
    InvalidType(String),
}

/// A function from one JSON document to another.
///
/// The CLI driver only knows this trait, so the conversion rules can be
/// swapped without touching file handling.
pub trait Converter {
    fn convert(&self, document: Value) -> Result<Value, ConversionError>;
}

/// Passes documents through unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {
    fn convert(&self, document: Value) -> Result<Value, ConversionError> {
        Ok(document)
    }
}

/// OpenAPI 3.0 Schema Object to JSON Schema draft-04 converter
#[derive(Debug, Clone)]
pub struct SchemaConverter {
    options: ConvertOptions,
    stripped: Vec<&'static str>,
}

impl Default for SchemaConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        let stripped = options.stripped_keywords();
        Self { options, stripped }
    }

    /// Convert a root schema object.
    ///
    /// # Arguments
    ///
    /// * `document` - An OpenAPI Schema Object.
    ///
    /// # Returns
    ///
    /// The equivalent draft-04 schema, with `$schema` set.
    pub fn convert_document(&self, document: Value) -> Result<Value, ConversionError> {
        let Value::Object(mut root) = document else {
            return Err(ConversionError::NotAnObject(kind_of(&document).to_string()));
        };
        self.convert_schema(&mut root)?;
        root.insert("$schema".to_string(), Value::String(DRAFT_04_SCHEMA.to_string()));
        Ok(Value::Object(root))
    }

    fn convert_schema(&self, schema: &mut Map<String, Value>) -> Result<(), ConversionError> {
        for keyword in SUBSCHEMA_KEYWORDS {
            self.convert_subschemas(schema, keyword)?;
        }

        for keyword in &self.options.definition_keywords {
            if let Some(Value::Object(definitions)) = schema.get_mut(keyword.as_str()) {
                self.convert_properties(definitions)?;
            }
        }

        if let Some(properties) = schema.get_mut("properties") {
            match properties {
                Value::Object(properties) => self.convert_properties(properties)?,
                // Not a map of schemas: treat as empty so it and `required` get dropped
                other => *other = Value::Object(Map::new()),
            }
            clean_required(schema);
        }

        if self.options.strict_mode {
            validate_type(schema.get("type"))?;
        }
        convert_nullable(schema);
        convert_format(schema, &self.options);

        if self.options.support_pattern_properties
            && let Some(patterns) = schema.shift_remove("x-patternProperties")
        {
            self.convert_pattern_properties(schema, patterns)?;
        }

        for keyword in &self.stripped {
            schema.shift_remove(*keyword);
        }
        Ok(())
    }

    fn convert_subschemas(
        &self,
        schema: &mut Map<String, Value>,
        keyword: &str,
    ) -> Result<(), ConversionError> {
        match schema.get_mut(keyword) {
            Some(Value::Array(entries)) => {
                let before = entries.len();
                entries.retain(Value::is_object);
                if entries.len() != before {
                    debug!(
                        "Dropped {} non-object entries from '{}'",
                        before - entries.len(),
                        keyword
                    );
                }
                for entry in entries.iter_mut() {
                    if let Value::Object(entry) = entry {
                        self.convert_schema(entry)?;
                    }
                }
            }
            Some(Value::Object(subschema)) => self.convert_schema(subschema)?,
            Some(Value::Null) => {
                schema.shift_remove(keyword);
            }
            _ => {}
        }
        Ok(())
    }

    /// Convert a map of named schemas, dropping non-schema entries and, when
    /// asked, read/write-only ones
    fn convert_properties(
        &self,
        properties: &mut Map<String, Value>,
    ) -> Result<(), ConversionError> {
        properties.retain(|name, property| {
            let keep = property.is_object()
                && !(self.options.remove_read_only && is_flagged(property, "readOnly")
                    || self.options.remove_write_only && is_flagged(property, "writeOnly"));
            if !keep {
                debug!("Removing property '{}'", name);
            }
            keep
        });
        for property in properties.values_mut() {
            if let Value::Object(property) = property {
                self.convert_schema(property)?;
            }
        }
        Ok(())
    }

    fn convert_pattern_properties(
        &self,
        schema: &mut Map<String, Value>,
        mut patterns: Value,
    ) -> Result<(), ConversionError> {
        if let Value::Object(pattern_schemas) = &mut patterns {
            for pattern_schema in pattern_schemas.values_mut() {
                if let Value::Object(pattern_schema) = pattern_schema {
                    self.convert_schema(pattern_schema)?;
                }
            }

            // additionalProperties duplicating a pattern schema adds nothing
            let duplicated = match schema.get("additionalProperties") {
                Some(additional @ Value::Object(_)) => {
                    pattern_schemas.values().any(|p| p == additional)
                }
                _ => false,
            };
            if duplicated {
                schema.insert("additionalProperties".to_string(), Value::Bool(false));
            }
        }
        schema.insert("patternProperties".to_string(), patterns);
        Ok(())
    }
}

impl Converter for SchemaConverter {
    fn convert(&self, document: Value) -> Result<Value, ConversionError> {
        self.convert_document(document)
    }
}

/// Keep only `required` names that still exist in `properties`
fn clean_required(schema: &mut Map<String, Value>) {
    let names: Vec<String> = match schema.get("properties") {
        Some(Value::Object(properties)) => properties.keys().cloned().collect(),
        _ => Vec::new(),
    };

    if let Some(Value::Array(required)) = schema.get_mut("required") {
        required.retain(|name| name.as_str().is_some_and(|n| names.iter().any(|k| k == n)));
        if required.is_empty() {
            schema.shift_remove("required");
        }
    }

    if names.is_empty() && matches!(schema.get("properties"), Some(Value::Object(_))) {
        schema.shift_remove("properties");
    }
}

/// A `type` is a known type name or an array of them; empty entries are ignored
fn validate_type(schema_type: Option<&Value>) -> Result<(), ConversionError> {
    let invalid = |value: &Value| ConversionError::InvalidType(value.to_string());
    match schema_type {
        None => Ok(()),
        Some(value @ (Value::Object(_) | Value::Null)) => Err(invalid(value)),
        Some(Value::Array(types)) => match types.iter().find(|t| !is_valid_type_entry(t)) {
            Some(bad) => Err(invalid(bad)),
            None => Ok(()),
        },
        Some(value) if is_valid_type_entry(value) => Ok(()),
        Some(value) => Err(invalid(value)),
    }
}

fn is_valid_type_entry(value: &Value) -> bool {
    match value {
        Value::String(t) => t.is_empty() || VALID_TYPES.contains(&t.as_str()),
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// `nullable: true` becomes a `null` member of `type` (and `enum`)
fn convert_nullable(schema: &mut Map<String, Value>) {
    if schema.get("nullable") != Some(&Value::Bool(true)) {
        return;
    }
    let null_type = Value::String("null".to_string());
    match schema.get_mut("type") {
        None => return,
        Some(Value::Array(types)) => {
            if !types.contains(&null_type) {
                types.push(null_type);
            }
        }
        Some(schema_type) => *schema_type = Value::Array(vec![schema_type.take(), null_type]),
    }
    if let Some(Value::Array(values)) = schema.get_mut("enum")
        && !values.contains(&Value::Null)
    {
        values.push(Value::Null);
    }
}

fn is_flagged(property: &Value, flag: &str) -> bool {
    property.get(flag) == Some(&Value::Bool(true))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
