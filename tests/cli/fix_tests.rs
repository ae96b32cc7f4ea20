//! Fix command tests

#[cfg(feature = "cli")]
use fix_schema::cli::commands::fix::{
    FixArgs, InputSource, OutputTarget, handle_fix, handle_fix_with, render_document,
};
#[cfg(feature = "cli")]
use fix_schema::cli::error::CliError;
#[cfg(feature = "cli")]
use fix_schema::convert::{ConvertOptions, IdentityConverter};
#[cfg(feature = "cli")]
use serde_json::{Value, json};
#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use tempfile::{NamedTempFile, TempDir};

#[cfg(feature = "cli")]
fn create_input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(feature = "cli")]
fn file_args(input: &Path, output: &Path) -> FixArgs {
    FixArgs::new(
        InputSource::File(input.to_path_buf()),
        OutputTarget::File(output.to_path_buf()),
    )
}

#[cfg(feature = "cli")]
fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[cfg(feature = "cli")]
#[test]
fn test_fix_converts_input_file() {
    let input = create_input_file(
        r#"{"type": "object", "properties": {"name": {"type": "string", "nullable": true}}}"#,
    );
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let result = handle_fix(&file_args(input.path(), &output));
    assert!(result.is_ok(), "Fix should succeed: {:?}", result.err());

    assert_eq!(
        read_json(&output),
        json!({
            "type": "object",
            "properties": {"name": {"type": ["string", "null"]}},
            "$schema": "http://json-schema.org/draft-04/schema#"
        })
    );
}

#[cfg(feature = "cli")]
#[test]
fn test_fix_output_is_two_space_pretty_json() {
    let input = create_input_file(r#"{"type":"object","properties":{"id":{"type":"integer"}}}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    handle_fix(&file_args(input.path(), &output)).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let expected = r#"{
  "type": "object",
  "properties": {
    "id": {
      "type": "integer"
    }
  },
  "$schema": "http://json-schema.org/draft-04/schema#"
}"#;
    assert_eq!(written, expected);
}

#[cfg(feature = "cli")]
#[test]
fn test_identity_round_trip() {
    let input = create_input_file(r#"{"type": "string"}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    handle_fix_with(&file_args(input.path(), &output), &IdentityConverter).unwrap();

    assert_eq!(read_json(&output), json!({"type": "string"}));
}

#[cfg(feature = "cli")]
#[test]
fn test_identity_flag_selects_identity_converter() {
    let input = create_input_file(r#"{"type": "string", "nullable": true}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let mut args = file_args(input.path(), &output);
    args.identity = true;
    handle_fix(&args).unwrap();

    assert_eq!(read_json(&output), json!({"type": "string", "nullable": true}));
}

#[cfg(feature = "cli")]
#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.json");
    let output = dir.path().join("out.json");

    let result = handle_fix(&file_args(&input, &output));
    assert!(matches!(result, Err(CliError::FileReadError(_, _))));
    assert!(!output.exists(), "Output file should not be created");
}

#[cfg(feature = "cli")]
#[test]
fn test_malformed_json_fails_without_output() {
    let input = create_input_file("{invalid");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let result = handle_fix(&file_args(input.path(), &output));
    assert!(matches!(result, Err(CliError::ParseError(_, _))));
    assert!(!output.exists(), "Output file should not be created");
}

#[cfg(feature = "cli")]
#[test]
fn test_conversion_error_leaves_existing_output_untouched() {
    let input = create_input_file(r#"{"type": "file"}"#);
    let output = create_input_file("previous content");

    let result = handle_fix(&file_args(input.path(), output.path()));
    assert!(matches!(result, Err(CliError::ConversionError(_))));
    assert_eq!(
        std::fs::read_to_string(output.path()).unwrap(),
        "previous content"
    );
}

#[cfg(feature = "cli")]
#[test]
fn test_existing_output_is_replaced() {
    let input = create_input_file(r#"{"type": "boolean"}"#);
    let output = create_input_file(&"unrelated content that is quite long\n".repeat(50));

    handle_fix(&file_args(input.path(), output.path())).unwrap();

    assert_eq!(
        read_json(output.path()),
        json!({"type": "boolean", "$schema": "http://json-schema.org/draft-04/schema#"})
    );
}

#[cfg(feature = "cli")]
#[test]
fn test_unwritable_output_path_fails() {
    let input = create_input_file(r#"{"type": "string"}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing-dir").join("out.json");

    let result = handle_fix(&file_args(input.path(), &output));
    assert!(matches!(result, Err(CliError::FileWriteError(_, _))));
    assert!(!output.exists());
}

#[cfg(feature = "cli")]
#[test]
fn test_options_are_passed_to_converter() {
    let input = create_input_file(
        r#"{
            "type": "object",
            "properties": {
                "id": {"type": "integer", "readOnly": true},
                "born": {"type": "string", "format": "date", "example": "2020-01-01"}
            },
            "required": ["id", "born"]
        }"#,
    );
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let mut args = file_args(input.path(), &output);
    args.options = ConvertOptions {
        date_to_date_time: true,
        remove_read_only: true,
        keep_not_supported: vec!["example".to_string()],
        ..Default::default()
    };
    handle_fix(&args).unwrap();

    let written = read_json(&output);
    assert_eq!(
        written["properties"],
        json!({"born": {"type": "string", "format": "date-time", "example": "2020-01-01"}})
    );
    assert_eq!(written["required"], json!(["born"]));
}

#[cfg(feature = "cli")]
#[test]
fn test_non_object_document_needs_identity() {
    let input = create_input_file("[1, 2, 3]");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let result = handle_fix(&file_args(input.path(), &output));
    assert!(matches!(result, Err(CliError::ConversionError(_))));

    let mut args = file_args(input.path(), &output);
    args.identity = true;
    handle_fix(&args).unwrap();
    assert_eq!(read_json(&output), json!([1, 2, 3]));
}

#[cfg(feature = "cli")]
#[test]
fn test_render_document_indents_by_two_spaces() {
    let rendered = render_document(&json!({"a": [1]})).unwrap();
    assert_eq!(rendered, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[cfg(feature = "cli")]
#[test]
fn test_dash_selects_stdio() {
    assert_eq!(InputSource::parse("-"), InputSource::Stdin);
    assert_eq!(OutputTarget::parse("-"), OutputTarget::Stdout);
    assert_eq!(
        InputSource::parse("schema.json"),
        InputSource::File("schema.json".into())
    );
}

#[cfg(all(feature = "cli", feature = "schema-validation"))]
#[test]
fn test_validate_accepts_converted_output() {
    let input = create_input_file(r#"{"type": "integer", "format": "int32", "nullable": true}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let mut args = file_args(input.path(), &output);
    args.validate = true;
    handle_fix(&args).unwrap();
    assert!(output.exists());
}

#[cfg(all(feature = "cli", feature = "schema-validation"))]
#[test]
fn test_validate_rejects_broken_output_without_writing() {
    let input = create_input_file(r#"{"type": 42}"#);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let mut args = file_args(input.path(), &output);
    args.identity = true;
    args.validate = true;
    let result = handle_fix(&args);
    assert!(matches!(result, Err(CliError::ValidationError(_))));
    assert!(!output.exists());
}
