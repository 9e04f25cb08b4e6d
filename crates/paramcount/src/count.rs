//! Closed-form parameter counting.
//!
//! This module holds the whole arithmetic core: a pure function from a
//! validated [`ModelConfig`] to a per-component [`ParameterBreakdown`].
//!
//! Component formulas (h = hidden size, v = vocab, L = layers,
//! s = sequence length, f = FFN expansion factor, r = KV size ratio):
//!
//! ```text
//! embedding  = h*v            (tied)     2*h*v   (untied)
//! position   = h*s
//! attention  = trunc(2 * (1 + r) * L * h * h)
//! layernorm  = 13 * L * h
//! ffn        = 2 * f * L * h * h                      (dense)
//! ffn        = 2*f*Le*E*h*h + 2*f*(L - Le)*h*h        (MoE, Le = L/interval)
//! gating     = Le * h * E                             (MoE only)
//! ```
//!
//! The layernorm constant 13 and the always-doubled attention
//! projection term are conventions carried over from the
//! parameter-counting literature; they are reproduced verbatim rather
//! than re-derived. MoE layer counts use real-valued division, so an
//! `expert_interval` that does not evenly divide `num_layers` is
//! tolerated (the expert/dense split just becomes fractional before
//! truncation).

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::{ParamCountError, Result};
use crate::format::format_count;

/// Per-component parameter counts for one model configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBreakdown {
    /// Input (and, when untied, output) embedding matrices
    pub embedding_params: u64,
    /// QKV and output projections across all layers
    pub attention_params: u64,
    /// Feed-forward networks, expert and dense layers combined
    pub ffn_params: u64,
    /// Layer normalization weights and biases
    pub layernorm_params: u64,
    /// Learned position embeddings
    pub position_embedding_params: u64,
    /// Expert routing networks; present only for MoE models
    pub gating_params: Option<u64>,
    /// Sum of all components above
    pub total_params: u64,
}

impl ParameterBreakdown {
    /// Format the breakdown as a multi-line report.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Embedding parameters: {}", format_count(self.embedding_params)),
            format!("Attention parameters: {}", format_count(self.attention_params)),
            format!("FFN parameters: {}", format_count(self.ffn_params)),
            format!(
                "Position embedding parameters: {}",
                format_count(self.position_embedding_params)
            ),
            format!("Layernorm parameters: {}", format_count(self.layernorm_params)),
        ];
        if let Some(gating) = self.gating_params {
            lines.push(format!("Gating parameters: {}", format_count(gating)));
        }
        lines.push(format!("Total parameters: {}", format_count(self.total_params)));
        lines.join("\n")
    }
}

/// Estimate the parameter count of a transformer model.
///
/// Validates the configuration first and rejects invalid records
/// without computing anything; the estimator never substitutes
/// defaults. All counts are carried as `u64` with overflow checks, so
/// oversized configurations fail loudly instead of wrapping.
///
/// # Example
///
/// ```
/// use paramcount::{estimate, ModelConfig};
///
/// let config = ModelConfig::new(12, 50257, 768, 1024).unwrap();
/// let breakdown = estimate(&config).unwrap();
/// assert_eq!(breakdown.total_params, 124_438_272);
/// ```
pub fn estimate(config: &ModelConfig) -> Result<ParameterBreakdown> {
    config.validate()?;

    let embedding_params = count_embedding_params(config)?;
    let position_embedding_params = count_position_embedding_params(config)?;
    let attention_params = count_attention_params(config)?;
    let layernorm_params = count_layernorm_params(config)?;
    let (ffn_params, gating_params) = count_ffn_params(config)?;

    let mut total_params = checked_sum(
        &[
            embedding_params,
            attention_params,
            ffn_params,
            position_embedding_params,
            layernorm_params,
        ],
        "total_params",
    )?;
    if let Some(gating) = gating_params {
        total_params = total_params
            .checked_add(gating)
            .ok_or(ParamCountError::CountOverflow {
                component: "total_params",
            })?;
    }

    Ok(ParameterBreakdown {
        embedding_params,
        attention_params,
        ffn_params,
        layernorm_params,
        position_embedding_params,
        gating_params,
        total_params,
    })
}

/// Input embedding matrix, doubled for a separate unembedding matrix
/// when the two are not tied.
fn count_embedding_params(config: &ModelConfig) -> Result<u64> {
    let factor = if config.tied_embeddings { 1 } else { 2 };
    checked_product(
        &[factor, config.hidden_size, config.vocab_size],
        "embedding_params",
    )
}

fn count_position_embedding_params(config: &ModelConfig) -> Result<u64> {
    checked_product(
        &[config.hidden_size, config.sequence_length],
        "position_embedding_params",
    )
}

/// Q and output projections are full-width; K/V shrink by
/// `kv_size_ratio` under grouped/multi-query attention. The product is
/// truncated toward zero after the floating-point multiply.
fn count_attention_params(config: &ModelConfig) -> Result<u64> {
    let hidden = config.hidden_size as f64;
    let product =
        2.0 * (1.0 + config.kv_size_ratio) * config.num_layers as f64 * hidden * hidden;
    truncate_count(product, "attention_params")
}

/// Weight+bias pairs for the per-sublayer layernorms plus the final
/// layernorm, folded into a single conventional constant of 13h per
/// layer. The constant is empirical and is kept verbatim.
fn count_layernorm_params(config: &ModelConfig) -> Result<u64> {
    checked_product(
        &[13, config.num_layers, config.hidden_size],
        "layernorm_params",
    )
}

/// Feed-forward parameters, plus the router/gating count for MoE
/// models. Two (h x f*h) matrices per FFN; for MoE, every
/// `expert_interval`-th layer carries `num_experts` expert FFNs and a
/// linear gating layer while the remaining layers stay dense.
fn count_ffn_params(config: &ModelConfig) -> Result<(u64, Option<u64>)> {
    let layers = config.num_layers as f64;
    let hidden = config.hidden_size as f64;
    let factor = config.ffn_expansion_factor;

    match &config.moe {
        None => {
            let dense = 2.0 * factor * layers * hidden * hidden;
            Ok((truncate_count(dense, "ffn_params")?, None))
        }
        Some(moe) => {
            let expert_layers = layers / moe.expert_interval as f64;
            let experts = moe.num_experts as f64;

            let expert_ffn = 2.0 * factor * expert_layers * experts * hidden * hidden;
            let dense_ffn = 2.0 * factor * (layers - expert_layers) * hidden * hidden;
            let ffn = truncate_count(expert_ffn + dense_ffn, "ffn_params")?;

            let gating = truncate_count(expert_layers * hidden * experts, "gating_params")?;
            Ok((ffn, Some(gating)))
        }
    }
}

fn checked_product(factors: &[u64], component: &'static str) -> Result<u64> {
    factors.iter().try_fold(1u64, |acc, &factor| {
        acc.checked_mul(factor)
            .ok_or(ParamCountError::CountOverflow { component })
    })
}

fn checked_sum(terms: &[u64], component: &'static str) -> Result<u64> {
    terms.iter().try_fold(0u64, |acc, &term| {
        acc.checked_add(term)
            .ok_or(ParamCountError::CountOverflow { component })
    })
}

/// Truncate a float-path product toward zero, range-checked so casts
/// never wrap or saturate silently.
fn truncate_count(value: f64, component: &'static str) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return Err(ParamCountError::CountOverflow { component });
    }
    Ok(value as u64)
}
