//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "raxe",
    version,
    about = "Raxe (Rust + axe-core JSON)",
    long_about = "Raxe — a tiny, fast CLI to normalize and print axe-core accessibility scan results.\n\nConfiguration precedence: CLI > raxe.toml > defaults.",
    after_help = "Examples:\n  raxe report --input axe-results.json\n  raxe report --input 'reports/*.json' --output json\n  raxe report --input axe-results.json --check",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for reporting on scan results.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current raxe version."
    )]
    Version,
    /// Build reports from axe result files
    #[command(
        about = "Normalize and print axe results",
        long_about = "Read axe-core JSON result files, build the normalized report model (violation totals, per-rule summaries, expanded node details), and print it.",
        after_help = "Examples:\n  raxe report --input axe-results.json\n  raxe report --input 'reports/*.json' --output json\n  raxe report --input axe-results.json --check"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Glob for axe result JSON files (required)")]
        input: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when violations are found")]
        check: bool,
    },
}
