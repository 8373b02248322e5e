//! Depth-first traversal of the AST.
//!
//! The walker visits every reachable element in pre-order and hands each
//! classified node to a [`Visitor`]. Groups are reported before their
//! children. Composite nodes are not reported at all; instead the walker
//! descends into each of their fields in insertion order, which lets it reach
//! elements wrapped in node kinds it knows nothing about.

use casemap_core::ast::{Actor, Element, Group, Relationship, Root, UseCase, Value};

use crate::{
    classify::{Variant, classify},
    error::ProjectionError,
};

/// Callbacks invoked by the walker.
///
/// All methods default to doing nothing, so a visitor only implements the
/// variants it cares about.
pub trait Visitor {
    fn actor(&mut self, _actor: &Actor) -> Result<(), ProjectionError> {
        Ok(())
    }

    fn use_case(&mut self, _use_case: &UseCase) -> Result<(), ProjectionError> {
        Ok(())
    }

    /// Called when a group is reached.
    ///
    /// Returns whether the walker should descend into the group's elements.
    fn group(&mut self, _group: &Group) -> Result<bool, ProjectionError> {
        Ok(true)
    }

    fn relationship(&mut self, _relationship: &Relationship) -> Result<(), ProjectionError> {
        Ok(())
    }
}

/// Walk every diagram of `root` in document order.
///
/// # Errors
///
/// Stops at and returns the first error raised by the visitor.
pub fn walk_root<V>(root: &Root, visitor: &mut V) -> Result<(), ProjectionError>
where
    V: Visitor + ?Sized,
{
    for diagram in root.diagrams() {
        walk_elements(diagram.elements(), visitor)?;
    }
    Ok(())
}

/// Walk a single element and everything reachable from it.
///
/// # Errors
///
/// Stops at and returns the first error raised by the visitor.
pub fn walk_element<V>(element: &Element, visitor: &mut V) -> Result<(), ProjectionError>
where
    V: Visitor + ?Sized,
{
    match classify(element) {
        Variant::Actor(actor) => visitor.actor(actor),
        Variant::UseCase(use_case) => visitor.use_case(use_case),
        Variant::Relationship(relationship) => visitor.relationship(relationship),
        Variant::Group(group) => {
            if visitor.group(group)? {
                walk_elements(group.elements(), visitor)?;
            }
            Ok(())
        }
        Variant::Other(composite) => {
            for (_, value) in composite.fields() {
                walk_value(value, visitor)?;
            }
            Ok(())
        }
    }
}

fn walk_elements<V>(elements: &[Element], visitor: &mut V) -> Result<(), ProjectionError>
where
    V: Visitor + ?Sized,
{
    for element in elements {
        walk_element(element, visitor)?;
    }
    Ok(())
}

fn walk_value<V>(value: &Value, visitor: &mut V) -> Result<(), ProjectionError>
where
    V: Visitor + ?Sized,
{
    match value {
        Value::Scalar(_) => Ok(()),
        Value::Element(element) => walk_element(element, visitor),
        Value::List(values) => {
            for value in values {
                walk_value(value, visitor)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use casemap_core::ast::{Composite, Diagram, Document, Scalar};

    use crate::projection::Category;

    /// Records every callback as a short event string.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip_groups: bool,
    }

    impl Visitor for Recorder {
        fn actor(&mut self, actor: &Actor) -> Result<(), ProjectionError> {
            self.events.push(format!("actor:{}", actor.name()));
            Ok(())
        }

        fn use_case(&mut self, use_case: &UseCase) -> Result<(), ProjectionError> {
            self.events.push(format!("usecase:{}", use_case.name()));
            Ok(())
        }

        fn group(&mut self, group: &Group) -> Result<bool, ProjectionError> {
            self.events.push(format!("group:{}", group.name()));
            Ok(!self.skip_groups)
        }

        fn relationship(&mut self, relationship: &Relationship) -> Result<(), ProjectionError> {
            let (left, right) = (relationship.left(), relationship.right());
            self.events.push(format!("rel:{left}->{right}"));
            Ok(())
        }
    }

    fn sample_root() -> Root {
        let inner = Group::rectangle(
            "R",
            "System",
            vec![
                UseCase::new("U2", "Refund").into(),
                Actor::new("A2", "Bot").into(),
            ],
        );
        let package = Group::package(
            "P",
            "Billing",
            vec![UseCase::new("U1", "Pay").into(), inner.into()],
        );

        Document::new(vec![
            Diagram::new(vec![
                Actor::new("A1", "Alice").into(),
                package.into(),
                Relationship::new("A1", "U1").into(),
            ]),
            Diagram::new(vec![UseCase::new("U3", "Audit").into()]),
        ])
        .into()
    }

    #[test]
    fn test_walk_is_pre_order() {
        let mut recorder = Recorder::default();
        walk_root(&sample_root(), &mut recorder).expect("walk succeeds");

        assert_eq!(
            recorder.events,
            vec![
                "actor:A1",
                "group:P",
                "usecase:U1",
                "group:R",
                "usecase:U2",
                "actor:A2",
                "rel:A1->U1",
                "usecase:U3",
            ]
        );
    }

    #[test]
    fn test_walk_skips_group_children_on_request() {
        let mut recorder = Recorder {
            skip_groups: true,
            ..Recorder::default()
        };
        walk_root(&sample_root(), &mut recorder).expect("walk succeeds");

        assert_eq!(
            recorder.events,
            vec!["actor:A1", "group:P", "rel:A1->U1", "usecase:U3"]
        );
    }

    #[test]
    fn test_walk_descends_into_composites() {
        let wrapper = Composite::new("together")
            .with_field("label", "ignored")
            .with_field("count", Scalar::Number(3.0))
            .with_field(
                "body",
                vec![
                    Element::from(Actor::new("A", "Alice")),
                    Composite::new("note")
                        .with_field("attached", Element::from(UseCase::new("U", "Pay")))
                        .into(),
                ],
            )
            .with_field("tail", Element::from(Relationship::new("A", "U")));

        let root = Root::from(vec![Diagram::new(vec![wrapper.into()])]);
        let mut recorder = Recorder::default();
        walk_root(&root, &mut recorder).expect("walk succeeds");

        assert_eq!(recorder.events, vec!["actor:A", "usecase:U", "rel:A->U"]);
    }

    #[test]
    fn test_walk_reaches_diagram_nested_in_composite() {
        let nested = Composite::new("Diagram").with_field(
            "elements",
            vec![Element::from(Group::package(
                "P",
                "Pkg",
                vec![Actor::new("A", "Alice").into()],
            ))],
        );
        let root = Root::from(vec![Diagram::new(vec![nested.into()])]);
        let mut recorder = Recorder::default();
        walk_root(&root, &mut recorder).expect("walk succeeds");

        assert_eq!(recorder.events, vec!["group:P", "actor:A"]);
    }

    #[test]
    fn test_walk_stops_at_first_error() {
        struct FailOnActor {
            seen: usize,
        }

        impl Visitor for FailOnActor {
            fn use_case(&mut self, _use_case: &UseCase) -> Result<(), ProjectionError> {
                self.seen += 1;
                Ok(())
            }

            fn actor(&mut self, actor: &Actor) -> Result<(), ProjectionError> {
                Err(ProjectionError::MalformedNode {
                    category: Category::Actor,
                    title: actor.title().to_string(),
                })
            }
        }

        let root = Root::from(vec![Diagram::new(vec![
            UseCase::new("U1", "Pay").into(),
            Actor::new("A", "Alice").into(),
            UseCase::new("U2", "Refund").into(),
        ])]);
        let mut visitor = FailOnActor { seen: 0 };

        let err = walk_root(&root, &mut visitor).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::MalformedNode {
                category: Category::Actor,
                ..
            }
        ));
        assert_eq!(visitor.seen, 1);
    }
}
