//! Hyperparameter records for dense and Mixture-of-Experts transformers.

use serde::{Deserialize, Serialize};

use crate::error::{ParamCountError, Result};

/// Mixture-of-Experts settings.
///
/// Only present on a [`ModelConfig`] when the model replaces (some of)
/// its dense feed-forward layers with expert layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoeConfig {
    /// Number of expert networks per MoE layer
    pub num_experts: u64,
    /// Number of layers between MoE layers (1 = every layer is MoE,
    /// 2 = every other layer, as in GShard)
    pub expert_interval: u64,
    /// Routing fan-out per token. Accepted for forward compatibility
    /// with active-parameter cost models; the total-count formula does
    /// not consult it.
    pub top_k: u64,
}

impl MoeConfig {
    /// Create new MoE settings with top-1 routing
    pub fn new(num_experts: u64, expert_interval: u64) -> Result<Self> {
        let config = Self {
            num_experts,
            expert_interval,
            top_k: 1,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder: set the routing fan-out per token
    pub fn with_top_k(mut self, top_k: u64) -> Self {
        self.top_k = top_k;
        self
    }

    /// Validate the MoE settings in isolation.
    ///
    /// The cross-field check against `num_layers` lives in
    /// [`ModelConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.num_experts == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "num_experts",
                "must be >= 1",
            ));
        }
        if self.expert_interval == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "expert_interval",
                "must be >= 1",
            ));
        }
        if self.top_k == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "top_k",
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Architectural hyperparameters of a decoder-style transformer.
///
/// One record fully determines the closed-form parameter count computed
/// by [`crate::count::estimate`]. Constructed records are validated;
/// records built field-by-field are re-validated before any counting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of transformer blocks
    pub num_layers: u64,
    /// Vocabulary size
    pub vocab_size: u64,
    /// Model/embedding width (d_model)
    pub hidden_size: u64,
    /// Maximum context length (learned position embeddings)
    pub sequence_length: u64,
    /// Whether input and output embedding matrices share weights
    pub tied_embeddings: bool,
    /// Ratio of the feed-forward inner dimension to the hidden size
    pub ffn_expansion_factor: f64,
    /// Ratio of the key/value projection size to the query projection
    /// size (< 1 models grouped-query / multi-query attention)
    pub kv_size_ratio: f64,
    /// Mixture-of-Experts settings, if the model uses expert layers
    pub moe: Option<MoeConfig>,
}

impl ModelConfig {
    /// Create a new dense configuration with conventional defaults:
    /// tied embeddings, 4x feed-forward expansion, full-width KV
    /// projections, and no expert layers.
    pub fn new(
        num_layers: u64,
        vocab_size: u64,
        hidden_size: u64,
        sequence_length: u64,
    ) -> Result<Self> {
        let config = Self {
            num_layers,
            vocab_size,
            hidden_size,
            sequence_length,
            tied_embeddings: true,
            ffn_expansion_factor: 4.0,
            kv_size_ratio: 1.0,
            moe: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder: set whether input/output embeddings share weights
    pub fn with_tied_embeddings(mut self, tied: bool) -> Self {
        self.tied_embeddings = tied;
        self
    }

    /// Builder: set the feed-forward expansion factor
    pub fn with_ffn_expansion_factor(mut self, factor: f64) -> Self {
        self.ffn_expansion_factor = factor;
        self
    }

    /// Builder: set the KV-to-query projection size ratio
    pub fn with_kv_size_ratio(mut self, ratio: f64) -> Self {
        self.kv_size_ratio = ratio;
        self
    }

    /// Builder: enable Mixture-of-Experts feed-forward layers
    pub fn with_moe(mut self, moe: MoeConfig) -> Self {
        self.moe = Some(moe);
        self
    }

    /// Validate the full record, including the cross-field constraint
    /// between `expert_interval` and `num_layers`.
    pub fn validate(&self) -> Result<()> {
        if self.num_layers == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "num_layers",
                "must be > 0",
            ));
        }
        if self.vocab_size == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "vocab_size",
                "must be > 0",
            ));
        }
        if self.hidden_size == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "hidden_size",
                "must be > 0",
            ));
        }
        if self.sequence_length == 0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "sequence_length",
                "must be > 0",
            ));
        }
        if !self.ffn_expansion_factor.is_finite() || self.ffn_expansion_factor <= 0.0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "ffn_expansion_factor",
                format!("must be a positive number, got {}", self.ffn_expansion_factor),
            ));
        }
        if !self.kv_size_ratio.is_finite() || self.kv_size_ratio <= 0.0 {
            return Err(ParamCountError::invalid_hyperparameter(
                "kv_size_ratio",
                format!("must be a positive number, got {}", self.kv_size_ratio),
            ));
        }

        if let Some(moe) = &self.moe {
            moe.validate()?;
            if moe.expert_interval > self.num_layers {
                return Err(ParamCountError::invalid_hyperparameter(
                    "expert_interval",
                    format!(
                        "must be <= num_layers ({}), got {}",
                        self.num_layers, moe.expert_interval
                    ),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_valid() {
        let config = ModelConfig::new(12, 50257, 768, 1024).unwrap();
        assert_eq!(config.num_layers, 12);
        assert_eq!(config.vocab_size, 50257);
        assert!(config.tied_embeddings);
        assert!(config.moe.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_model_config_rejects_zero_fields() {
        assert!(ModelConfig::new(0, 50257, 768, 1024).is_err());
        assert!(ModelConfig::new(12, 0, 768, 1024).is_err());
        assert!(ModelConfig::new(12, 50257, 0, 1024).is_err());
        assert!(ModelConfig::new(12, 50257, 768, 0).is_err());
    }

    #[test]
    fn test_model_config_rejects_non_positive_ratios() {
        let base = ModelConfig::new(12, 50257, 768, 1024).unwrap();

        let config = base.clone().with_ffn_expansion_factor(0.0);
        assert!(config.validate().is_err());

        let config = base.clone().with_ffn_expansion_factor(f64::NAN);
        assert!(config.validate().is_err());

        let config = base.clone().with_kv_size_ratio(-0.5);
        assert!(config.validate().is_err());

        let config = base.with_kv_size_ratio(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ModelConfig::new(12, 50257, 768, 1024)
            .unwrap()
            .with_tied_embeddings(false)
            .with_ffn_expansion_factor(3.5)
            .with_kv_size_ratio(0.25);

        assert!(!config.tied_embeddings);
        assert!((config.ffn_expansion_factor - 3.5).abs() < 1e-12);
        assert!((config.kv_size_ratio - 0.25).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_moe_config_valid() {
        let moe = MoeConfig::new(8, 1).unwrap().with_top_k(2);
        assert_eq!(moe.num_experts, 8);
        assert_eq!(moe.expert_interval, 1);
        assert_eq!(moe.top_k, 2);
        assert!(moe.validate().is_ok());
    }

    #[test]
    fn test_moe_config_rejects_zero_fields() {
        assert!(MoeConfig::new(0, 1).is_err());
        assert!(MoeConfig::new(8, 0).is_err());

        let moe = MoeConfig::new(8, 1).unwrap().with_top_k(0);
        assert!(moe.validate().is_err());
    }

    #[test]
    fn test_expert_interval_cross_check() {
        let moe = MoeConfig::new(8, 24).unwrap();
        let config = ModelConfig::new(12, 50257, 768, 1024)
            .unwrap()
            .with_moe(moe);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("expert_interval"));
    }

    #[test]
    fn test_expert_interval_equal_to_layers_is_valid() {
        let moe = MoeConfig::new(8, 12).unwrap();
        let config = ModelConfig::new(12, 50257, 768, 1024)
            .unwrap()
            .with_moe(moe);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ModelConfig::new(12, 50257, 768, 1024)
            .unwrap()
            .with_moe(MoeConfig::new(8, 2).unwrap().with_top_k(2));

        let json = serde_json::to_string(&config).unwrap();
        let back: ModelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
