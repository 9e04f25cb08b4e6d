//! paramcount CLI - transformer parameter calculator
//!
//! Collects a hyperparameter record from command-line flags (or a named
//! preset), runs the estimator, and renders the breakdown.

mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use paramcount::estimate;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        output::enable_colors(false);
    }

    match &cli.command {
        Some(Commands::Presets) => {
            output::print_preset_list();
            Ok(())
        }
        None => {
            let config = cli.to_config()?;
            let breakdown = estimate(&config)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                output::print_breakdown(&breakdown);
            }
            Ok(())
        }
    }
}
