//! OpenAPI schema converter module
//!
//! Rewrites OpenAPI 3.0 Schema Objects into JSON Schema draft-04 documents.

pub mod converter;
pub mod formats;
pub mod options;

pub use converter::{ConversionError, Converter, DRAFT_04_SCHEMA, IdentityConverter, SchemaConverter};
pub use options::{ConvertOptions, NOT_SUPPORTED_KEYWORDS};
