//! CLI module for c2go
//!
//! ## Commands
//!
//! - `builtins` - List the builtin function prototypes the translator is seeded with
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use c2go_core::lang::shims::DEFAULT_MODULE_ROOT;
use clap::{Parser, Subcommand};

use crate::transpiler::FunctionRegistry;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// C to Go translator
#[derive(Parser, Debug)]
#[command(name = "c2go")]
#[command(version = VERSION)]
#[command(about = "C to Go translator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the builtin function prototypes and their Go substitutes
    Builtins {
        /// Print JSON instead of one prototype per line
        #[arg(long)]
        json: bool,
        /// Go module hosting the darwin/linux/noarch shim packages
        #[arg(long, value_name = "MODULE", default_value = DEFAULT_MODULE_ROOT)]
        module_root: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{}", e.message);
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return what it prints.
fn execute(cli: Cli) -> CliResult<String> {
    match cli.command {
        Command::Builtins { json, module_root } => list_builtins(json, &module_root),
    }
}

/// Render the seeded registry, sorted by name.
pub fn list_builtins(json: bool, module_root: &str) -> CliResult<String> {
    let mut registry = FunctionRegistry::new(module_root);
    let prototypes = registry.prototypes();

    if !json {
        let mut out = String::new();
        for prototype in prototypes {
            out.push_str(&prototype.to_string());
            out.push('\n');
        }
        return Ok(out);
    }

    let entries: Vec<serde_json::Value> = prototypes
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "return_type": p.return_type,
                "argument_types": p.argument_types,
                "arity": p.arity(),
                "substitution": p.substitution.as_ref().map(|s| s.as_str()),
                "import": p.substitution.as_ref().and_then(|s| s.import_path()),
            })
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&entries)
        .map_err(|e| CliError::failure(format!("Error serializing builtins: {}", e)))?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
