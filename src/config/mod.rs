//! Configuration module for the Canvas connection
//!
//! This module provides the `CanvasConfig` struct and its type-safe builder.
//! The config is passed explicitly to every pipeline stage; nothing reads it
//! from process-wide state.

// Sub-modules
pub mod builder;
pub mod types;

// Re-exports for public API
pub use builder::{CanvasConfigBuilder, Complete, WithBaseUrl};
pub use types::{CanvasConfig, ConfigError};
