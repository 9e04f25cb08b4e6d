//! Colored output formatting for the parameter calculator CLI

use colored::*;
use paramcount::{format_count, ModelPreset, ParameterBreakdown};

pub fn enable_colors(enabled: bool) {
    colored::control::set_override(enabled);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Render the breakdown line by line: embedding, attention, FFN,
/// gating (for MoE models), total.
pub fn print_breakdown(breakdown: &ParameterBreakdown) {
    println!(
        "Embedding parameters: {}",
        format_count(breakdown.embedding_params).green()
    );
    println!(
        "Attention parameters: {}",
        format_count(breakdown.attention_params).cyan()
    );
    println!(
        "FFN parameters: {}",
        format_count(breakdown.ffn_params).yellow()
    );
    if let Some(gating) = breakdown.gating_params {
        println!("Gating parameters: {}", format_count(gating).magenta());
    }
    println!(
        "Total parameters: {}",
        format_count(breakdown.total_params).bold()
    );
}

pub fn print_preset_list() {
    println!("{}", "Available presets".cyan().bold());
    println!("{}", "=".repeat("Available presets".len()).cyan());
    for preset in ModelPreset::ALL {
        println!("  {:<14} {}", preset.name().green(), preset.description());
    }
}
