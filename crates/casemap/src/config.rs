//! Configuration types for Casemap projections.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every section is optional and falls back to its
//! default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining projection and output settings.
//! - [`ProjectionConfig`] - Selects the name resolution [`Strategy`].
//! - [`OutputConfig`] - Selects the rendered [`OutputFormat`].
//!
//! # Example
//!
//! ```
//! # use casemap::{config::AppConfig, render::OutputFormat, resolve::Strategy};
//! let config = AppConfig::default().with_strategy(Strategy::Enriched);
//! assert_eq!(config.projection().strategy(), Strategy::Enriched);
//! assert_eq!(config.output().format(), OutputFormat::Json);
//! ```

use serde::Deserialize;

use crate::{render::OutputFormat, resolve::Strategy};

/// Top-level configuration combining projection and output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    projection: ProjectionConfig,

    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(projection: ProjectionConfig, output: OutputConfig) -> Self {
        Self { projection, output }
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replace the configured resolution strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.projection.strategy = strategy;
        self
    }

    /// Replace the configured output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Settings for the projection engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectionConfig {
    /// How relationship endpoints are resolved.
    #[serde(default)]
    strategy: Strategy,
}

impl ProjectionConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Settings for rendering the finished projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
