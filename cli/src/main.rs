mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use signature_console::{
    Command as ConsoleCommand, ConsoleConfig, ConsoleError, Io, Output, OutputKind, Value,
    Verbosity, run_command,
};
use signature_core::{CommandDefinition, parse_signature, validate_definition};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::format::{OutputFormat, format_definitions};

#[derive(Debug, Parser)]
#[command(name = "sigparse", version)]
#[command(about = "Parse, validate and try compact command signatures")]
struct Cli {
    /// Console configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse signatures and print their definitions.
    Parse(ParseArgs),
    /// Parse signatures and check them for structural problems.
    Validate(ValidateArgs),
    /// Bind command-line arguments against a signature and show the result.
    Try(TryArgs),
}

#[derive(Debug, Args)]
struct SignatureSource {
    /// Signature expressions, e.g. 'mail:send {user} {--queue=}'.
    signatures: Vec<String>,
    /// File with one signature per line ('#' starts a comment line).
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    source: SignatureSource,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    #[command(flatten)]
    source: SignatureSource,
}

#[derive(Debug, Args)]
struct TryArgs {
    /// Signature to bind against.
    signature: String,
    /// Print the bound input as JSON instead of tables.
    #[arg(long)]
    json: bool,
    /// Arguments for the signature's command (after `--`).
    #[arg(last = true)]
    args: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Validate(args) => run_validate(args),
        Command::Try(args) => run_try(args, &config),
    });

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ConsoleConfig, String> {
    match path {
        Some(path) => ConsoleConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display())),
        None => Ok(ConsoleConfig::default()),
    }
}

fn run_parse(args: ParseArgs) -> Result<i32, String> {
    let signatures = collect_signatures(&args.source)?;
    let definitions = signatures
        .iter()
        .map(|signature| {
            parse_signature(signature).map_err(|e| format!("Failed to parse '{signature}': {e}"))
        })
        .collect::<Result<Vec<CommandDefinition>, String>>()?;

    let output = format_definitions(&definitions, args.format)?;
    println!("{}", output.trim_end());
    Ok(0)
}

fn run_validate(args: ValidateArgs) -> Result<i32, String> {
    let signatures = collect_signatures(&args.source)?;
    let mut failed = 0usize;

    for signature in &signatures {
        let definition = match parse_signature(signature) {
            Ok(definition) => definition,
            Err(err) => {
                failed += 1;
                eprintln!("{signature}: {err}");
                continue;
            }
        };
        let errors = validate_definition(&definition);
        if errors.is_empty() {
            println!("ok: {}", definition.name);
        } else {
            failed += 1;
            for error in &errors {
                eprintln!("{}: {error}", definition.name);
            }
        }
    }

    if failed > 0 {
        return Err(format!(
            "{failed} of {} signature(s) failed validation",
            signatures.len()
        ));
    }
    println!("Validated {} signature(s).", signatures.len());
    Ok(0)
}

fn run_try(args: TryArgs, config: &ConsoleConfig) -> Result<i32, String> {
    let mut command = TryCommand {
        signature: args.signature,
        json: args.json,
    };

    let result = if config.output == OutputKind::Buffered {
        let mut output = config.build_buffered();
        let result = run_command(&mut command, &args.args, &mut output);
        print!("{}", output.take());
        result
    } else {
        let mut output = config.build_output();
        run_command(&mut command, &args.args, output.as_mut())
    };

    result.map_err(|err| match err {
        ConsoleError::Input(err) => err
            .to_string()
            .trim_start_matches("error: ")
            .trim_end()
            .to_string(),
        other => other.to_string(),
    })
}

/// Command that reports whatever it was bound with.
struct TryCommand {
    signature: String,
    json: bool,
}

impl ConsoleCommand for TryCommand {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn handle(&mut self, io: &mut Io<'_>) -> signature_console::Result<i32> {
        debug!(command = %io.command_name(), json = self.json, "Reporting bound input");

        if self.json {
            let json = serde_json::to_string_pretty(io.input())
                .map_err(|e| std::io::Error::other(format!("JSON serialization failed: {e}")))?;
            io.output().write_line(&json, None);
            return Ok(0);
        }

        let arguments = rows(io.arguments());
        let options = rows(io.options());
        let name = io.command_name().to_string();

        let output = io.output();
        output.title(&name);
        if !arguments.is_empty() {
            output.section("Arguments");
            output.table(&["Name", "Value"], &arguments);
        }
        if !options.is_empty() {
            output.section("Options");
            output.table(&["Name", "Value"], &options);
        }
        let verbosity = output.verbosity();
        output.line(
            &format!("verbosity: {}", verbosity.symbol()),
            None,
            Verbosity::Verbose,
        );
        Ok(0)
    }
}

fn rows<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> Vec<Vec<String>> {
    entries
        .map(|(name, value)| vec![name.to_string(), value.to_string()])
        .collect()
}

fn collect_signatures(source: &SignatureSource) -> Result<Vec<String>, String> {
    let mut signatures = source.signatures.clone();
    if let Some(path) = &source.file {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        signatures.extend(signature_lines(&raw));
    }
    if signatures.is_empty() {
        return Err("Specify at least one signature or --file".to_string());
    }
    Ok(signatures)
}

fn signature_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}
