// 🧾 merge-accounting CLI
// Decode, normalize and validate Merge Accounting payloads by record name

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use merge_accounting::{RecordRegistry, SchemaValidator, ValidationConfig};

/// Typed records for the Merge Accounting API
#[derive(Parser)]
#[command(name = "merge-accounting", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the record types that can be decoded or validated
    Types,

    /// Decode a payload as TYPE and print it back as normalized JSON
    Decode {
        /// Record type name, e.g. Invoice (case-insensitive)
        record: String,

        /// Read the payload from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Check a raw payload against TYPE's declared shape
    Validate {
        /// Record type name, e.g. Invoice (case-insensitive)
        record: String,

        /// Read the payload from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also check every element of list fields
        #[arg(long, env = "MERGE_ACCOUNTING_DEEP_LISTS", default_value_t = false)]
        deep_lists: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    let registry = RecordRegistry::new();

    match command {
        Commands::Types => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::Decode { record, file, pretty } => {
            let raw = read_input(file.as_deref())?;
            let normalized = registry.normalize(&record, &raw)?;
            let output = if pretty {
                serde_json::to_string_pretty(&normalized)?
            } else {
                serde_json::to_string(&normalized)?
            };
            println!("{}", output);
        }
        Commands::Validate { record, file, deep_lists } => {
            let raw = read_input(file.as_deref())?;
            let candidate: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
            let validator = SchemaValidator::with_config(ValidationConfig { deep_lists });

            registry.validate_raw(&record, &candidate, Some(&validator))?;
            println!("✓ valid {}", record);
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}
