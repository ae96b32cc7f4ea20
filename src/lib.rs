//! fix-schema - OpenAPI schema to JSON Schema converter
//!
//! Provides:
//! - The `convert` module, rewriting OpenAPI 3.0 Schema Objects as JSON Schema draft-04
//! - The `cli` module (feature `cli`), which reads a document, converts it and writes it back out

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;

// Re-export commonly used types
pub use convert::{ConversionError, ConvertOptions, Converter, IdentityConverter, SchemaConverter};

/// Convert an OpenAPI schema document with default options.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let schema = fix_schema::convert(json!({"type": "integer", "nullable": true})).unwrap();
/// assert_eq!(schema["type"], json!(["integer", "null"]));
/// assert_eq!(schema["$schema"], json!("http://json-schema.org/draft-04/schema#"));
/// ```
pub fn convert(document: serde_json::Value) -> Result<serde_json::Value, ConversionError> {
    SchemaConverter::new().convert(document)
}
