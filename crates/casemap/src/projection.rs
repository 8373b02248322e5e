//! Projection output model.
//!
//! A [`Projection`] is the categorized, cross-referenced view of a use case
//! document. It owns plain copies of everything it reports, so it can outlive
//! the AST it was built from and serializes without further decisions.
//!
//! Field order in every record is fixed by declaration order here; the
//! renderers rely on it for diffable output.

use std::fmt;

use serde::{Deserialize, Serialize};

use casemap_core::ast::GroupKind;

/// Semantic category of a named element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Actor,
    UseCase,
    Package,
    Rectangle,
    /// Sentinel for relationship endpoints that could not be resolved.
    Unknown,
}

impl Category {
    /// Returns `true` unless this is [`Category::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl From<GroupKind> for Category {
    fn from(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Package => Category::Package,
            GroupKind::Rectangle => Category::Rectangle,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Actor => write!(f, "Actor"),
            Category::UseCase => write!(f, "UseCase"),
            Category::Package => write!(f, "Package"),
            Category::Rectangle => write!(f, "Rectangle"),
            Category::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The projected document.
///
/// Collections keep the order in which the walker first reached each node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    actors: Vec<ActorRecord>,
    usecases: Vec<UseCaseRecord>,
    packages: Vec<GroupRecord>,
    rectangles: Vec<GroupRecord>,
    relationships: Vec<ResolvedRelationship>,
}

impl Projection {
    pub fn actors(&self) -> &[ActorRecord] {
        &self.actors
    }

    pub fn use_cases(&self) -> &[UseCaseRecord] {
        &self.usecases
    }

    pub fn packages(&self) -> &[GroupRecord] {
        &self.packages
    }

    pub fn rectangles(&self) -> &[GroupRecord] {
        &self.rectangles
    }

    /// Returns the packages or rectangles, depending on `kind`.
    pub fn groups(&self, kind: GroupKind) -> &[GroupRecord] {
        match kind {
            GroupKind::Package => &self.packages,
            GroupKind::Rectangle => &self.rectangles,
        }
    }

    pub fn relationships(&self) -> &[ResolvedRelationship] {
        &self.relationships
    }

    /// Returns `true` if no collection holds any record.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
            && self.usecases.is_empty()
            && self.packages.is_empty()
            && self.rectangles.is_empty()
            && self.relationships.is_empty()
    }

    pub(crate) fn push_actor(&mut self, actor: ActorRecord) {
        self.actors.push(actor);
    }

    pub(crate) fn push_use_case(&mut self, use_case: UseCaseRecord) {
        self.usecases.push(use_case);
    }

    pub(crate) fn push_group(&mut self, kind: GroupKind, group: GroupRecord) {
        match kind {
            GroupKind::Package => self.packages.push(group),
            GroupKind::Rectangle => self.rectangles.push(group),
        }
    }

    pub(crate) fn push_relationship(&mut self, relationship: ResolvedRelationship) {
        self.relationships.push(relationship);
    }
}

/// Projected actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    name: String,
    title: String,
    stereotype: Vec<String>,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>, title: impl Into<String>, stereotype: Vec<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            stereotype,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stereotype(&self) -> &[String] {
        &self.stereotype
    }
}

/// Projected use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseRecord {
    name: String,
    title: String,
}

impl UseCaseRecord {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Projected package or rectangle with a summary of its direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    name: String,
    title: String,
    elements: Vec<ElementSummary>,
}

impl GroupRecord {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        elements: Vec<ElementSummary>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            elements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Direct actor and use case children, in declaration order.
    pub fn elements(&self) -> &[ElementSummary] {
        &self.elements
    }
}

/// Identity of an actor or use case listed inside a group record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    #[serde(rename = "type")]
    category: Category,
    name: String,
    title: String,
}

impl ElementSummary {
    pub fn new(category: Category, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            title: title.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A relationship whose endpoints have been resolved to categories.
///
/// The left end of the source relationship becomes the `source`, the right
/// end the `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRelationship {
    source: String,
    target: String,
    source_type: Category,
    target_type: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relationship_type: Option<String>,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_arrow_head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_arrow_head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_arrow_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_arrow_body: Option<String>,
}

impl ResolvedRelationship {
    /// Create a relationship record with an empty label and no arrow metadata.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        source_type: Category,
        target_type: Category,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_type,
            target_type,
            relationship_type: None,
            label: String::new(),
            source_arrow_head: None,
            target_arrow_head: None,
            source_arrow_body: None,
            target_arrow_body: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_relationship_type(mut self, relationship_type: Option<String>) -> Self {
        self.relationship_type = relationship_type;
        self
    }

    pub fn with_arrow_heads(mut self, source: Option<String>, target: Option<String>) -> Self {
        self.source_arrow_head = source;
        self.target_arrow_head = target;
        self
    }

    pub fn with_arrow_bodies(mut self, source: Option<String>, target: Option<String>) -> Self {
        self.source_arrow_body = source;
        self.target_arrow_body = target;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn source_type(&self) -> Category {
        self.source_type
    }

    pub fn target_type(&self) -> Category {
        self.target_type
    }

    pub fn relationship_type(&self) -> Option<&str> {
        self.relationship_type.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source_arrow_head(&self) -> Option<&str> {
        self.source_arrow_head.as_deref()
    }

    pub fn target_arrow_head(&self) -> Option<&str> {
        self.target_arrow_head.as_deref()
    }

    pub fn source_arrow_body(&self) -> Option<&str> {
        self.source_arrow_body.as_deref()
    }

    pub fn target_arrow_body(&self) -> Option<&str> {
        self.target_arrow_body.as_deref()
    }
}
