//! Dense transformer breakdown example.
//!
//! Builds a GPT-2-small-shaped configuration by hand and prints the
//! per-component parameter counts.
//!
//! Run with: `cargo run --example 01_dense_breakdown`

use paramcount::{estimate, format_count, ModelConfig, Result};

fn main() -> Result<()> {
    println!("=== Dense Transformer Parameter Breakdown ===\n");

    let config = ModelConfig::new(12, 50257, 768, 1024)?;
    println!(
        "Configuration: {} layers, {} hidden, vocab {}, context {}",
        config.num_layers, config.hidden_size, config.vocab_size, config.sequence_length
    );

    let breakdown = estimate(&config)?;
    println!("\n{}\n", breakdown.summary());

    // Untied embeddings double only the embedding term
    let untied = config.with_tied_embeddings(false);
    let untied_breakdown = estimate(&untied)?;
    println!(
        "With untied embeddings the total grows from {} to {}",
        format_count(breakdown.total_params),
        format_count(untied_breakdown.total_params)
    );

    Ok(())
}
