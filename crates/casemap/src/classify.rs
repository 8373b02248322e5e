//! Node classification.
//!
//! [`classify`] is the single place where an [`Element`] is mapped onto the
//! variants the engine acts on. It borrows the node and never fails: any shape
//! outside the recognized set is reported as [`Variant::Other`].

use casemap_core::ast::{Actor, Composite, Element, Group, Relationship, UseCase};

use crate::projection::Category;

/// Borrowed view of a classified element.
#[derive(Debug, Clone, Copy)]
pub enum Variant<'a> {
    Actor(&'a Actor),
    UseCase(&'a UseCase),
    Group(&'a Group),
    Relationship(&'a Relationship),
    Other(&'a Composite),
}

impl<'a> Variant<'a> {
    /// The category a name of this variant resolves to, if it declares one.
    ///
    /// Relationships and composites declare no name and return `None`.
    pub fn category(&self) -> Option<Category> {
        match self {
            Variant::Actor(_) => Some(Category::Actor),
            Variant::UseCase(_) => Some(Category::UseCase),
            Variant::Group(group) => Some(group.kind().into()),
            Variant::Relationship(_) | Variant::Other(_) => None,
        }
    }

    /// The declared identity, for variants that have one.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Variant::Actor(actor) => Some(actor.name()),
            Variant::UseCase(use_case) => Some(use_case.name()),
            Variant::Group(group) => Some(group.name()),
            Variant::Relationship(_) | Variant::Other(_) => None,
        }
    }

    /// The display title, for variants that have one.
    pub fn title(&self) -> Option<&'a str> {
        match self {
            Variant::Actor(actor) => Some(actor.title()),
            Variant::UseCase(use_case) => Some(use_case.title()),
            Variant::Group(group) => Some(group.title()),
            Variant::Relationship(_) | Variant::Other(_) => None,
        }
    }
}

/// Classify an element.
pub fn classify(element: &Element) -> Variant<'_> {
    match element {
        Element::Actor(actor) => Variant::Actor(actor),
        Element::UseCase(use_case) => Variant::UseCase(use_case),
        Element::Group(group) => Variant::Group(group),
        Element::Relationship(relationship) => Variant::Relationship(relationship),
        Element::Other(composite) => Variant::Other(composite),
    }
}
