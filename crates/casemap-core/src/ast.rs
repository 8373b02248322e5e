//! Use case diagram AST types.
//!
//! These types mirror what the external PlantUML-style parser produces for a
//! use case diagram. They are read-only input for the projection engine.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ external parser
//! JSON AST dump
//!     ↓ json decoder
//! AST (these types)
//!     ↓ casemap walker + resolver
//! Projection
//!     ↓ render
//! JSON / YAML
//! ```
//!
//! # Organization
//!
//! - [`document`] - Traversal roots: [`Root`], [`Document`], [`Diagram`]
//! - [`element`] - Recognized elements: [`Element`], [`Actor`], [`UseCase`], [`Group`],
//!   [`Relationship`]
//! - [`composite`] - Opaque nodes: [`Composite`], [`Value`], [`Scalar`]
//!
//! Every type owns its children, so a tree built from these types can never
//! share a sub-node between two parents.

pub mod composite;
pub mod document;
pub mod element;

pub use composite::*;
pub use document::*;
pub use element::*;
