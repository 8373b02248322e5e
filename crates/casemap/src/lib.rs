//! Casemap - Categorized projections of use case diagrams.
//!
//! Takes the AST of a use case diagram document and walks it once, sorting
//! actors, use cases, packages, and rectangles into their own collections and
//! resolving every relationship endpoint to the category of the element it
//! names. The result is a [`Projection`](projection::Projection) that renders
//! as JSON or YAML.

pub mod bucket;
pub mod classify;
pub mod config;
pub mod engine;
pub mod projection;
pub mod relationship;
pub mod render;
pub mod resolve;
pub mod walk;

mod error;

pub use casemap_core::{ast, json};

pub use error::{CasemapError, ProjectionError, RenderError};

use log::{debug, info, trace};

use ast::Root;
use config::AppConfig;
use projection::Projection;

/// Facade for loading, projecting, and rendering use case diagrams.
///
/// # Examples
///
/// ```rust
/// use casemap::{Projector, config::AppConfig, resolve::Strategy};
///
/// let dump = r#"[{"node": "Diagram", "elements": [
///     {"node": "Actor", "name": "C1", "title": "Client"},
///     {"node": "UseCase", "name": "UC1", "title": "View Dashboard"},
///     {"node": "Relationship", "left": "C1", "right": "UC1"}
/// ]}]"#;
///
/// let projector = Projector::new(AppConfig::default().with_strategy(Strategy::Enriched));
///
/// let root = projector.load(dump).expect("Failed to load");
/// let projection = projector.project(&root).expect("Failed to project");
/// let text = projector.render(&projection).expect("Failed to render");
///
/// assert!(text.contains("\"sourceType\": \"Actor\""));
///
/// // Or use default config
/// let projector = Projector::default();
/// ```
#[derive(Debug, Default)]
pub struct Projector {
    config: AppConfig,
}

impl Projector {
    /// Create a new projector with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode a JSON AST dump.
    ///
    /// # Errors
    ///
    /// Returns [`CasemapError::Ast`] if the text is not valid JSON or its
    /// root is neither a document nor an array of diagrams.
    pub fn load(&self, source: &str) -> Result<Root, CasemapError> {
        info!(bytes = source.len(); "Loading AST dump");

        let root = json::from_str(source)?;

        debug!(diagrams = root.diagrams().len(); "AST dump decoded");
        trace!(root:?; "Decoded AST");

        Ok(root)
    }

    /// Project `root` with the configured resolution strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CasemapError::Projection`] if a declaration has no name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casemap::{Projector, ast::{Actor, Diagram, Root}};
    ///
    /// let root = Root::from(vec![Diagram::new(vec![Actor::new("A", "Alice").into()])]);
    /// let projection = Projector::default().project(&root).expect("Failed to project");
    /// assert_eq!(projection.actors().len(), 1);
    /// ```
    pub fn project(&self, root: &Root) -> Result<Projection, CasemapError> {
        let strategy = self.config.projection().strategy();
        info!(strategy:?; "Projecting");

        let projection = engine::project(root, strategy)?;
        Ok(projection)
    }

    /// Render a projection in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`CasemapError::Render`] if serialization fails.
    pub fn render(&self, projection: &Projection) -> Result<String, CasemapError> {
        let format = self.config.output().format();
        info!(format:?; "Rendering projection");

        let text = render::render(projection, format)?;

        debug!(bytes = text.len(); "Projection rendered");
        Ok(text)
    }
}
