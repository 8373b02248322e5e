//! Diagram element types.

use std::{fmt, str::FromStr};

use crate::ast::Composite;

/// A node inside a diagram.
///
/// The four recognized variants are closed; anything the parser emits that
/// is not one of them is kept as an opaque [`Composite`] so that elements
/// nested inside it can still be reached.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Actor(Actor),
    UseCase(UseCase),
    Group(Group),
    Relationship(Relationship),
    Other(Composite),
}

impl From<Actor> for Element {
    fn from(actor: Actor) -> Self {
        Element::Actor(actor)
    }
}

impl From<UseCase> for Element {
    fn from(use_case: UseCase) -> Self {
        Element::UseCase(use_case)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Element::Group(group)
    }
}

impl From<Relationship> for Element {
    fn from(relationship: Relationship) -> Self {
        Element::Relationship(relationship)
    }
}

impl From<Composite> for Element {
    fn from(composite: Composite) -> Self {
        Element::Other(composite)
    }
}

/// An `actor` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    name: String,
    title: String,
    stereotypes: Vec<String>,
}

impl Actor {
    /// Create a new Actor without stereotypes.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            stereotypes: Vec::new(),
        }
    }

    /// Attach stereotype tags such as `<<human>>`.
    pub fn with_stereotypes(mut self, stereotypes: Vec<String>) -> Self {
        self.stereotypes = stereotypes;
        self
    }

    /// The identity used by relationships to refer to this actor.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stereotypes(&self) -> &[String] {
        &self.stereotypes
    }
}

/// A `usecase` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct UseCase {
    name: String,
    title: String,
}

impl UseCase {
    /// Create a new UseCase.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    /// The identity used by relationships to refer to this use case.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The kind of a grouping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Package,
    Rectangle,
}

impl FromStr for GroupKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "package" => Ok(GroupKind::Package),
            "rectangle" => Ok(GroupKind::Rectangle),
            _ => Err("Invalid group kind"),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Package => write!(f, "package"),
            GroupKind::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// A `package` or `rectangle` block with nested elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    kind: GroupKind,
    name: String,
    title: String,
    elements: Vec<Element>,
}

impl Group {
    /// Create a new Group of the given kind.
    pub fn new(
        kind: GroupKind,
        name: impl Into<String>,
        title: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            title: title.into(),
            elements,
        }
    }

    /// Shorthand for a [`GroupKind::Package`] group.
    pub fn package(
        name: impl Into<String>,
        title: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self::new(GroupKind::Package, name, title, elements)
    }

    /// Shorthand for a [`GroupKind::Rectangle`] group.
    pub fn rectangle(
        name: impl Into<String>,
        title: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self::new(GroupKind::Rectangle, name, title, elements)
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the nested elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// A connection between two named elements, e.g. `C1 --> UC1 : uses`.
///
/// Endpoints are names, not references; resolving them to a category is the
/// projection engine's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    left: String,
    right: String,
    label: Option<String>,
    left_arrow_head: Option<String>,
    right_arrow_head: Option<String>,
    left_arrow_body: Option<String>,
    right_arrow_body: Option<String>,
    relationship_type: Option<String>,
}

impl Relationship {
    /// Create a new Relationship between two endpoint names.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            label: None,
            left_arrow_head: None,
            right_arrow_head: None,
            left_arrow_body: None,
            right_arrow_body: None,
            relationship_type: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the arrow heads drawn at the left and right ends.
    pub fn with_arrow_heads(mut self, left: Option<String>, right: Option<String>) -> Self {
        self.left_arrow_head = left;
        self.right_arrow_head = right;
        self
    }

    /// Set the line style of the left and right halves of the arrow.
    pub fn with_arrow_bodies(mut self, left: Option<String>, right: Option<String>) -> Self {
        self.left_arrow_body = left;
        self.right_arrow_body = right;
        self
    }

    /// Set the relationship kind, such as `include` or `extends`.
    pub fn with_relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
        self.relationship_type = Some(relationship_type.into());
        self
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn left_arrow_head(&self) -> Option<&str> {
        self.left_arrow_head.as_deref()
    }

    pub fn right_arrow_head(&self) -> Option<&str> {
        self.right_arrow_head.as_deref()
    }

    pub fn left_arrow_body(&self) -> Option<&str> {
        self.left_arrow_body.as_deref()
    }

    pub fn right_arrow_body(&self) -> Option<&str> {
        self.right_arrow_body.as_deref()
    }

    pub fn relationship_type(&self) -> Option<&str> {
        self.relationship_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_kind_from_str() {
        assert_eq!("package".parse::<GroupKind>(), Ok(GroupKind::Package));
        assert_eq!("rectangle".parse::<GroupKind>(), Ok(GroupKind::Rectangle));
        assert!("folder".parse::<GroupKind>().is_err());
        assert!("Package".parse::<GroupKind>().is_err());
    }

    #[test]
    fn test_group_kind_display_matches_from_str() {
        for kind in [GroupKind::Package, GroupKind::Rectangle] {
            assert_eq!(kind.to_string().parse::<GroupKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_relationship_builder_defaults() {
        let rel = Relationship::new("C1", "UC1");

        assert_eq!(rel.left(), "C1");
        assert_eq!(rel.right(), "UC1");
        assert_eq!(rel.label(), None);
        assert_eq!(rel.left_arrow_head(), None);
        assert_eq!(rel.relationship_type(), None);
    }

    #[test]
    fn test_relationship_builder_sets_metadata() {
        let rel = Relationship::new("UC1", "UC2")
            .with_label("includes")
            .with_arrow_heads(None, Some(">".to_string()))
            .with_arrow_bodies(Some(".".to_string()), Some(".".to_string()))
            .with_relationship_type("include");

        assert_eq!(rel.label(), Some("includes"));
        assert_eq!(rel.left_arrow_head(), None);
        assert_eq!(rel.right_arrow_head(), Some(">"));
        assert_eq!(rel.left_arrow_body(), Some("."));
        assert_eq!(rel.right_arrow_body(), Some("."));
        assert_eq!(rel.relationship_type(), Some("include"));
    }

    #[test]
    fn test_group_shorthands() {
        let package = Group::package("P", "Billing", vec![]);
        let rectangle = Group::rectangle("R", "System", vec![UseCase::new("U", "Pay").into()]);

        assert_eq!(package.kind(), GroupKind::Package);
        assert_eq!(rectangle.kind(), GroupKind::Rectangle);
        assert_eq!(rectangle.elements().len(), 1);
    }
}
