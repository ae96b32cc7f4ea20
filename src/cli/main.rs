//! CLI binary entry point for fix-schema

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use clap::error::ErrorKind;
#[cfg(feature = "cli")]
use fix_schema::cli::commands::fix::{FixArgs, InputSource, OutputTarget, handle_fix};
#[cfg(feature = "cli")]
use fix_schema::cli::error::CliError;
#[cfg(feature = "cli")]
use fix_schema::convert::ConvertOptions;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fix-schema")]
#[command(about = "Convert an OpenAPI schema document to JSON Schema draft-04")]
#[command(version)]
struct Cli {
    /// Input schema file ('-' for stdin)
    input: String,
    /// Output file, overwritten if present ('-' for stdout)
    output: String,
    /// Rewrite `format: date` to `format: date-time`
    #[arg(long)]
    date_to_date_time: bool,
    /// Convert `x-patternProperties` to `patternProperties`
    #[arg(long)]
    support_pattern_properties: bool,
    /// Keep an OpenAPI-only keyword (nullable, example, ...) in the output
    #[arg(long, value_name = "KEYWORD")]
    keep_not_supported: Vec<String>,
    /// Accept `type` values JSON Schema does not define
    #[arg(long)]
    no_strict_mode: bool,
    /// Drop properties marked readOnly
    #[arg(long)]
    remove_read_only: bool,
    /// Drop properties marked writeOnly
    #[arg(long)]
    remove_write_only: bool,
    /// Also convert the named schemas under this keyword (e.g. definitions)
    #[arg(long = "definition-keyword", value_name = "KEYWORD")]
    definition_keywords: Vec<String>,
    /// Copy the document through without converting it
    #[arg(long)]
    identity: bool,
    /// Check the output compiles as a draft-04 JSON Schema before writing
    #[arg(long)]
    validate: bool,
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    fn into_args(self) -> FixArgs {
        let options = ConvertOptions {
            date_to_date_time: self.date_to_date_time,
            support_pattern_properties: self.support_pattern_properties,
            keep_not_supported: self.keep_not_supported,
            strict_mode: !self.no_strict_mode,
            remove_read_only: self.remove_read_only,
            remove_write_only: self.remove_write_only,
            definition_keywords: self.definition_keywords,
        };

        FixArgs {
            input: InputSource::parse(&self.input),
            output: OutputTarget::parse(&self.output),
            options,
            identity: self.identity,
            validate: self.validate,
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Missing positionals get the short usage line, not clap's report
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", CliError::Usage);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // An empty path counts as a missing one
    if cli.input.is_empty() || cli.output.is_empty() {
        eprintln!("{}", CliError::Usage);
        std::process::exit(1);
    }

    init_logging(cli.verbose);

    if let Err(e) = handle_fix(&cli.into_args()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
