//! Common test utilities for the generation tests.
//!
//! This module provides shared fixtures (sample pipeline documents and
//! temporary project directories).

pub mod fixtures;

pub use fixtures::*;
