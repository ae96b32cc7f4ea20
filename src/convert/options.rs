//! Converter settings

use serde::Deserialize;

/// OpenAPI-only keywords that have no JSON Schema counterpart.
pub const NOT_SUPPORTED_KEYWORDS: [&str; 8] = [
    "nullable",
    "discriminator",
    "readOnly",
    "writeOnly",
    "xml",
    "externalDocs",
    "example",
    "deprecated",
];

/// Options controlling how an OpenAPI schema is rewritten.
///
/// Every field has a default, so a partial JSON object (or `{}`) deserializes
/// into a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Rewrite `format: date` to `format: date-time`
    pub date_to_date_time: bool,
    /// Move `x-patternProperties` to `patternProperties`
    pub support_pattern_properties: bool,
    /// OpenAPI-only keywords to keep in the output
    pub keep_not_supported: Vec<String>,
    /// Reject `type` values JSON Schema does not know
    pub strict_mode: bool,
    /// Drop properties marked `readOnly: true`
    pub remove_read_only: bool,
    /// Drop properties marked `writeOnly: true`
    pub remove_write_only: bool,
    /// Extra keywords holding maps of named schemas, e.g. `definitions`
    pub definition_keywords: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            date_to_date_time: false,
            support_pattern_properties: false,
            keep_not_supported: Vec::new(),
            strict_mode: true,
            remove_read_only: false,
            remove_write_only: false,
            definition_keywords: Vec::new(),
        }
    }
}

impl ConvertOptions {
    /// Keywords that will be stripped from every schema object.
    pub fn stripped_keywords(&self) -> Vec<&'static str> {
        NOT_SUPPORTED_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| !self.keep_not_supported.iter().any(|k| k == keyword))
            .collect()
    }
}
