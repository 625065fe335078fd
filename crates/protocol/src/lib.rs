//! # adfdoc-protocol
//!
//! Data models shared by the adfdoc crates.
//!
//! This crate defines the structures used for:
//! - Decoding Data Factory pipeline documents (`pipeline.json`)
//! - Decoding the optional adfdoc configuration file (`adfdoc.toml`)
//!
//! ## Modules
//!
//! - [`pipeline_models`]: Pipeline, activity, dependency and parameter structures
//! - [`config_models`]: Global configuration from the TOML config file
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and indexmap
//! - Tolerant decoding: unknown fields are ignored, optional fields default
//! - Independent compilation: No dependencies on other adfdoc crates

pub mod config_models;
pub mod pipeline_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use pipeline_models::*;
