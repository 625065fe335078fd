//! Configuration loading.
//!
//! This module loads the optional `adfdoc.toml` file that tunes rendering.

pub mod error;
pub mod loader;
