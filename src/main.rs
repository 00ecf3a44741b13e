//! Raxe CLI binary entry point.
//! Delegates to modules for loading/assembling reports and prints results.

mod cli;
mod config;
mod models;
mod output;
mod report;
mod scan;
mod utils;
mod wcag;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            repo_root,
            input,
            output,
            check,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                input.as_deref(),
                output.as_deref(),
                if check { Some(true) } else { None },
            );
            // Require input to be configured (no default)
            if !eff.input_configured {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "Input is not configured. Pass --input or add raxe.toml."
                );
                std::process::exit(2);
            }
            // Friendly note if no raxe config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No raxe.toml found; using defaults."
                );
            }
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let (scans, errors) = scan::load_scans(&repo_root_str, &eff.input);
            if scans.is_empty() && !errors.is_empty() && eff.output != "json" {
                for e in &errors {
                    eprintln!("{} {}", utils::error_prefix(), e);
                }
                std::process::exit(2);
            }
            if eff.output != "json" && scans.len() > 1 {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Matched {} result files for '{}'", scans.len(), eff.input)
                );
            }
            let reports: Vec<(String, models::Report)> = scans
                .iter()
                .map(|s| {
                    (
                        s.file.clone(),
                        report::prepare_report(&s.results, &wcag::reference_from_tags),
                    )
                })
                .collect();
            output::print_reports(&reports, &eff.output, &errors);
            let total: usize = reports.iter().map(|(_, r)| output::violations_total(r)).sum();
            if eff.check && total > 0 {
                std::process::exit(1);
            }
        }
    }
}
