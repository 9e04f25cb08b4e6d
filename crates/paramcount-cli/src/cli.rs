//! CLI argument definitions using clap

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use paramcount::{ModelConfig, ModelPreset, MoeConfig};

#[derive(Parser)]
#[command(name = "paramcount")]
#[command(author, version, about = "Estimate transformer parameter counts from hyperparameters")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of transformer layers
    #[arg(short = 'l', long, default_value_t = 12)]
    pub num_layers: u64,

    /// Vocabulary size
    #[arg(short = 'v', long, default_value_t = 50257)]
    pub vocab_size: u64,

    /// Embedding or hidden size (d_model)
    #[arg(short = 'd', long, default_value_t = 768)]
    pub hidden_size: u64,

    /// Maximum sequence length
    #[arg(short = 's', long, default_value_t = 1024)]
    pub sequence_length: u64,

    /// Use separate input and output embedding matrices
    #[arg(long)]
    pub untied_embeddings: bool,

    /// Ratio of the FFN inner dimension to the hidden size
    #[arg(long, default_value_t = 4.0)]
    pub ffn_expansion_factor: f64,

    /// Ratio of the KV projection size to the query projection size
    #[arg(long, default_value_t = 1.0)]
    pub kv_size_ratio: f64,

    /// Use Mixture-of-Experts feed-forward layers
    #[arg(long)]
    pub moe: bool,

    /// Number of experts per MoE layer (with --moe)
    #[arg(long, default_value_t = 8)]
    pub num_experts: u64,

    /// Layers between MoE layers, 1 = every layer (with --moe)
    #[arg(long, default_value_t = 1)]
    pub expert_interval: u64,

    /// Top-k routing fan-out per token (with --moe)
    #[arg(long, default_value_t = 1)]
    pub top_k: u64,

    /// Start from a named preset instead of the individual flags
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Emit the full breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available model presets
    Presets,
}

impl Cli {
    /// Build the hyperparameter record this invocation describes.
    pub fn to_config(&self) -> Result<ModelConfig> {
        if let Some(name) = &self.preset {
            let Some(preset) = ModelPreset::from_name(name) else {
                bail!("unknown preset `{name}`; run `paramcount presets` for the list");
            };
            return Ok(preset.config());
        }

        let moe = if self.moe {
            Some(MoeConfig {
                num_experts: self.num_experts,
                expert_interval: self.expert_interval,
                top_k: self.top_k,
            })
        } else {
            None
        };

        let config = ModelConfig {
            num_layers: self.num_layers,
            vocab_size: self.vocab_size,
            hidden_size: self.hidden_size,
            sequence_length: self.sequence_length,
            tied_embeddings: !self.untied_embeddings,
            ffn_expansion_factor: self.ffn_expansion_factor,
            kv_size_ratio: self.kv_size_ratio,
            moe,
        };
        config
            .validate()
            .context("invalid hyperparameter combination")?;
        Ok(config)
    }
}
