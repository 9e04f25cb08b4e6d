//! Mixture-of-Experts breakdown example.
//!
//! Shows how expert count and expert interval change the feed-forward
//! and gating terms while the attention stack stays fixed.
//!
//! Run with: `cargo run --example 02_mixture_of_experts`

use paramcount::{estimate, format_count, ModelConfig, ModelPreset, MoeConfig, Result};

fn main() -> Result<()> {
    println!("=== Mixture-of-Experts Parameter Breakdown ===\n");

    let dense = ModelConfig::new(24, 50257, 1024, 2048)?;
    let dense_breakdown = estimate(&dense)?;
    println!(
        "Dense baseline (24 layers, 1024 hidden): {}",
        format_count(dense_breakdown.total_params)
    );

    // Every layer MoE with 8 experts
    let moe = dense.clone().with_moe(MoeConfig::new(8, 1)?.with_top_k(2));
    let moe_breakdown = estimate(&moe)?;
    println!(
        "8 experts, every layer:                  {}",
        format_count(moe_breakdown.total_params)
    );

    // GShard-style: experts on every other layer
    let interleaved = dense.with_moe(MoeConfig::new(8, 2)?.with_top_k(2));
    let interleaved_breakdown = estimate(&interleaved)?;
    println!(
        "8 experts, every other layer:            {}",
        format_count(interleaved_breakdown.total_params)
    );

    println!("\nFull breakdown of a Mixtral-style preset:\n");
    let breakdown = estimate(&ModelPreset::Mixtral8x7B.config())?;
    println!("{}", breakdown.summary());

    Ok(())
}
