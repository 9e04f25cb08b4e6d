//! # paramcount
//!
//! Closed-form parameter counting for dense and Mixture-of-Experts
//! transformer architectures.
//!
//! Given a small hyperparameter record (layer count, hidden size,
//! vocabulary size, sequence length, feed-forward expansion factor,
//! KV projection ratio, optional MoE settings), this crate computes a
//! per-component parameter breakdown and a total, and formats counts
//! for human reading (`"124.44 M"`). It is a calculator, not a
//! simulator: one fixed sequence of multiplications and additions per
//! estimate, no model is ever instantiated.
//!
//! ## Components
//!
//! - **Estimator** ([`estimate`]): pure function from a validated
//!   [`ModelConfig`] to a [`ParameterBreakdown`].
//! - **Formatter** ([`format_params`], [`format_count`]): magnitude
//!   bucketing by powers of 1000 with two-decimal rounding.
//! - **Presets** ([`ModelPreset`]): published hyperparameters for
//!   common architectures, ready to feed to the estimator.
//!
//! ## Formula sketch
//!
//! ```text
//! embedding  = hidden * vocab        (x2 when embeddings are untied)
//! position   = hidden * seq_len
//! attention  = 2 * (1 + kv_ratio) * layers * hidden^2
//! layernorm  = 13 * layers * hidden
//! ffn        = 2 * expansion * layers * hidden^2     (dense)
//! gating     = expert_layers * hidden * num_experts  (MoE)
//! ```
//!
//! For MoE models the FFN term splits into expert layers (every
//! `expert_interval`-th layer, multiplied by `num_experts`) and the
//! remaining dense layers.
//!
//! ## Example
//!
//! ```
//! use paramcount::{estimate, format_count, ModelConfig};
//!
//! let config = ModelConfig::new(12, 50257, 768, 1024).unwrap();
//! let breakdown = estimate(&config).unwrap();
//!
//! assert_eq!(breakdown.total_params, 124_438_272);
//! assert_eq!(format_count(breakdown.total_params), "124.44 M");
//! ```

pub mod config;
pub mod count;
pub mod error;
pub mod format;
pub mod presets;

pub use config::{ModelConfig, MoeConfig};
pub use count::{estimate, ParameterBreakdown};
pub use error::{ParamCountError, Result};
pub use format::{format_count, format_params};
pub use presets::ModelPreset;
