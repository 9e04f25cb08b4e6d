//! Hyperparameter presets for well-known model families.
//!
//! Presets only package published hyperparameters into a
//! [`ModelConfig`]; they carry no counting semantics of their own.

use crate::config::{ModelConfig, MoeConfig};

/// Common transformer architectures with published hyperparameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelPreset {
    /// GPT-2 Small (~124M parameters)
    Gpt2Small,
    /// GPT-2 Medium (~350M parameters)
    Gpt2Medium,
    /// GPT-2 Large (~774M parameters)
    Gpt2Large,
    /// GPT-2 XL (~1.5B parameters)
    Gpt2Xl,
    /// GPT-3 6.7B
    Gpt3_6_7B,
    /// GPT-3 13B
    Gpt3_13B,
    /// GPT-3 175B (davinci)
    Gpt3_175B,
    /// Mixtral-style 8-expert MoE with grouped-query attention
    Mixtral8x7B,
}

impl ModelPreset {
    /// All presets, in display order
    pub const ALL: [ModelPreset; 8] = [
        ModelPreset::Gpt2Small,
        ModelPreset::Gpt2Medium,
        ModelPreset::Gpt2Large,
        ModelPreset::Gpt2Xl,
        ModelPreset::Gpt3_6_7B,
        ModelPreset::Gpt3_13B,
        ModelPreset::Gpt3_175B,
        ModelPreset::Mixtral8x7B,
    ];

    /// Build the hyperparameter record for this preset.
    pub fn config(&self) -> ModelConfig {
        match self {
            Self::Gpt2Small => Self::gpt2(12, 768),
            Self::Gpt2Medium => Self::gpt2(24, 1024),
            Self::Gpt2Large => Self::gpt2(36, 1280),
            Self::Gpt2Xl => Self::gpt2(48, 1600),
            Self::Gpt3_6_7B => Self::gpt3(32, 4096),
            Self::Gpt3_13B => Self::gpt3(40, 5120),
            Self::Gpt3_175B => Self::gpt3(96, 12288),
            Self::Mixtral8x7B => ModelConfig {
                num_layers: 32,
                vocab_size: 32000,
                hidden_size: 4096,
                sequence_length: 32768,
                tied_embeddings: false,
                // 14336 / 4096 SwiGLU intermediate
                ffn_expansion_factor: 3.5,
                // 8 KV heads against 32 query heads
                kv_size_ratio: 0.25,
                moe: Some(MoeConfig {
                    num_experts: 8,
                    expert_interval: 1,
                    top_k: 2,
                }),
            },
        }
    }

    fn gpt2(num_layers: u64, hidden_size: u64) -> ModelConfig {
        ModelConfig {
            num_layers,
            vocab_size: 50257,
            hidden_size,
            sequence_length: 1024,
            tied_embeddings: true,
            ffn_expansion_factor: 4.0,
            kv_size_ratio: 1.0,
            moe: None,
        }
    }

    fn gpt3(num_layers: u64, hidden_size: u64) -> ModelConfig {
        ModelConfig {
            num_layers,
            vocab_size: 50257,
            hidden_size,
            sequence_length: 2048,
            tied_embeddings: true,
            ffn_expansion_factor: 4.0,
            kv_size_ratio: 1.0,
            moe: None,
        }
    }

    /// Preset name as accepted by [`ModelPreset::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gpt2Small => "gpt2-small",
            Self::Gpt2Medium => "gpt2-medium",
            Self::Gpt2Large => "gpt2-large",
            Self::Gpt2Xl => "gpt2-xl",
            Self::Gpt3_6_7B => "gpt3-6.7b",
            Self::Gpt3_13B => "gpt3-13b",
            Self::Gpt3_175B => "gpt3-175b",
            Self::Mixtral8x7B => "mixtral-8x7b",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::Gpt2Small => "12 layers, 768 hidden, tied embeddings",
            Self::Gpt2Medium => "24 layers, 1024 hidden, tied embeddings",
            Self::Gpt2Large => "36 layers, 1280 hidden, tied embeddings",
            Self::Gpt2Xl => "48 layers, 1600 hidden, tied embeddings",
            Self::Gpt3_6_7B => "32 layers, 4096 hidden",
            Self::Gpt3_13B => "40 layers, 5120 hidden",
            Self::Gpt3_175B => "96 layers, 12288 hidden",
            Self::Mixtral8x7B => "32 layers, 4096 hidden, 8 experts with top-2 routing, GQA",
        }
    }

    /// Look up a preset by its listing name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|preset| preset.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::estimate;

    #[test]
    fn test_all_presets_validate() {
        for preset in ModelPreset::ALL {
            assert!(
                preset.config().validate().is_ok(),
                "{} failed validation",
                preset.name()
            );
        }
    }

    #[test]
    fn test_gpt2_small_matches_reference_total() {
        let breakdown = estimate(&ModelPreset::Gpt2Small.config()).unwrap();
        assert_eq!(breakdown.total_params, 124_438_272);
    }

    #[test]
    fn test_gpt2_family_grows() {
        let mut previous = 0;
        for preset in [
            ModelPreset::Gpt2Small,
            ModelPreset::Gpt2Medium,
            ModelPreset::Gpt2Large,
            ModelPreset::Gpt2Xl,
        ] {
            let total = estimate(&preset.config()).unwrap().total_params;
            assert!(total > previous, "{} did not grow", preset.name());
            previous = total;
        }
    }

    #[test]
    fn test_gpt3_175b_lands_near_175b() {
        let total = estimate(&ModelPreset::Gpt3_175B.config()).unwrap().total_params;
        assert!((170_000_000_000..190_000_000_000).contains(&total));
    }

    #[test]
    fn test_mixtral_preset_is_moe() {
        let config = ModelPreset::Mixtral8x7B.config();
        let moe = config.moe.as_ref().unwrap();
        assert_eq!(moe.num_experts, 8);
        assert_eq!(moe.top_k, 2);

        let breakdown = estimate(&config).unwrap();
        assert!(breakdown.gating_params.is_some());
        // Sparse FFN dominates the dense components
        assert!(breakdown.ffn_params > breakdown.attention_params);
    }

    #[test]
    fn test_from_name_round_trips() {
        for preset in ModelPreset::ALL {
            assert_eq!(ModelPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(ModelPreset::from_name("gpt5"), None);
    }
}
