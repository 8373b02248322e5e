//! Error types for Casemap operations.
//!
//! This module provides the main error type [`CasemapError`] which wraps the
//! error conditions of each stage: decoding the AST dump, projecting it, and
//! rendering the projection.

use std::io;

use thiserror::Error;

use casemap_core::AstError;

use crate::projection::Category;

/// The main error type for Casemap operations.
#[derive(Debug, Error)]
pub enum CasemapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("AST error: {0}")]
    Ast(#[from] AstError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the projection engine.
///
/// Unrecognized node shapes and unresolvable relationship endpoints are not
/// errors; the only hard failure is a declaration without an identity, since
/// bucketing and name resolution key everything by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("{category} node titled {title:?} has no name")]
    MalformedNode { category: Category, title: String },
}

/// Errors raised while serializing a projection.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
