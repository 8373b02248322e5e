//! Casemap Core Types and Definitions
//!
//! This crate provides the input side of the Casemap projection engine:
//!
//! - **AST**: The typed use case diagram tree produced by an external parser
//!   ([`ast`] module)
//! - **JSON decoding**: Turning the parser's JSON dump into that tree
//!   ([`json`] module)
//! - **Errors**: [`AstError`] for dumps that cannot be decoded

pub mod ast;
pub mod json;

mod error;

pub use error::AstError;
