//! Schema validation helpers

use crate::cli::error::CliError;
use serde_json::Value;

/// Check that a converted document compiles as a draft-04 JSON Schema
#[cfg(feature = "schema-validation")]
pub fn validate_json_schema(schema: &Value) -> Result<(), CliError> {
    // Building the validator checks the document against the draft-04 meta-schema
    jsonschema::draft4::new(schema)
        .map(|_| ())
        .map_err(|e| CliError::ValidationError(e.to_string()))
}

#[cfg(not(feature = "schema-validation"))]
pub fn validate_json_schema(_schema: &Value) -> Result<(), CliError> {
    // Validation disabled - feature not enabled
    tracing::warn!("Output validation requested but the 'schema-validation' feature is disabled");
    Ok(())
}
