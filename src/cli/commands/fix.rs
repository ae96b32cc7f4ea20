//! Fix command handler
//!
//! Reads one schema document, converts it, and writes the result. Every step
//! either succeeds or aborts the run, and the output is only touched once the
//! converted document has been rendered.

use crate::cli::error::CliError;
use crate::cli::validation::validate_json_schema;
use crate::convert::{ConvertOptions, Converter, IdentityConverter, SchemaConverter};
use serde_json::Value as JsonValue;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the source document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Where the converted document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path
    pub fn parse(input: &str) -> Self {
        if input == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(input))
        }
    }

    fn path(&self) -> &Path {
        match self {
            InputSource::File(path) => path,
            InputSource::Stdin => Path::new("-"),
        }
    }
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path
    pub fn parse(output: &str) -> Self {
        if output == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(output))
        }
    }
}

/// Arguments for the fix command
#[derive(Debug, Clone)]
pub struct FixArgs {
    pub input: InputSource,
    pub output: OutputTarget,
    pub options: ConvertOptions,
    pub identity: bool, // Copy the document through without converting
    pub validate: bool, // Compile the output as draft-04 before writing
}

impl FixArgs {
    /// Arguments for a plain `fix-schema <input> <output>` run
    pub fn new(input: InputSource, output: OutputTarget) -> Self {
        Self {
            input,
            output,
            options: ConvertOptions::default(),
            identity: false,
            validate: false,
        }
    }
}

/// Handle the fix command with the converter selected by `args`
pub fn handle_fix(args: &FixArgs) -> Result<(), CliError> {
    if args.identity {
        handle_fix_with(args, &IdentityConverter)
    } else {
        let converter = SchemaConverter::with_options(args.options.clone());
        handle_fix_with(args, &converter)
    }
}

/// Read, convert and write using an explicit converter
pub fn handle_fix_with<C: Converter>(args: &FixArgs, converter: &C) -> Result<(), CliError> {
    let content = load_input(&args.input)?;
    let document = parse_document(&content, args.input.path())?;
    debug!("Parsed {} bytes from {}", content.len(), args.input.path().display());

    let converted = converter.convert(document)?;

    if args.validate {
        validate_json_schema(&converted)?;
    }

    let rendered = render_document(&converted)?;
    write_output(&args.output, &rendered)?;
    if let OutputTarget::File(path) = &args.output {
        info!("Wrote converted schema to {}", path.display());
    }
    Ok(())
}

/// Load input content from InputSource
pub fn load_input(input: &InputSource) -> Result<String, CliError> {
    match input {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.clone(), e.to_string())),
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::FileReadError(PathBuf::from("-"), e.to_string()))?;
            Ok(buffer)
        }
    }
}

/// Parse document text as JSON
pub fn parse_document(content: &str, source: &Path) -> Result<JsonValue, CliError> {
    serde_json::from_str(content)
        .map_err(|e| CliError::ParseError(source.to_path_buf(), e.to_string()))
}

/// Render a document as JSON indented by two spaces
pub fn render_document(document: &JsonValue) -> Result<String, CliError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| CliError::SerializationError(e.to_string()))
}

/// Write rendered output, replacing any existing file
pub fn write_output(output: &OutputTarget, content: &str) -> Result<(), CliError> {
    match output {
        OutputTarget::File(path) => std::fs::write(path, content)
            .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string())),
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::FileWriteError(PathBuf::from("-"), e.to_string()))
        }
    }
}
