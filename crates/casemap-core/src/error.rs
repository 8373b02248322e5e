//! Error types for AST decoding.

use thiserror::Error;

/// Errors raised while decoding a parser dump into the AST.
///
/// Decoding is lenient about node shapes: unknown nodes become
/// [`Composite`](crate::ast::Composite) values instead of errors. Only input
/// that is not JSON at all, or whose root is neither a document nor a list of
/// diagrams, is rejected.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid root: expected a Document object or an array of diagrams, found {found}")]
    InvalidRoot { found: &'static str },
}
