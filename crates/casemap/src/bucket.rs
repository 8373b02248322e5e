//! Accumulation of classified nodes into a [`Projection`].

use casemap_core::ast::{Actor, Element, Group, UseCase};

use crate::{
    classify::{Variant, classify},
    error::ProjectionError,
    projection::{
        ActorRecord, Category, ElementSummary, GroupRecord, Projection, ResolvedRelationship,
        UseCaseRecord,
    },
};

/// The accumulator threaded through one projection run.
///
/// Each `record_*` call appends to the matching collection, so arrival order
/// is preserved. Declarations must carry a name.
#[derive(Debug, Default)]
pub struct Bucket {
    projection: Projection,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// The projection built so far.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Append an actor record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::MalformedNode`] if the actor has no name.
    pub fn record_actor(&mut self, actor: &Actor) -> Result<(), ProjectionError> {
        require_name(actor.name(), Category::Actor, actor.title())?;
        self.projection.push_actor(ActorRecord::new(
            actor.name(),
            actor.title(),
            actor.stereotypes().to_vec(),
        ));
        Ok(())
    }

    /// Append a use case record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::MalformedNode`] if the use case has no name.
    pub fn record_use_case(&mut self, use_case: &UseCase) -> Result<(), ProjectionError> {
        require_name(use_case.name(), Category::UseCase, use_case.title())?;
        self.projection
            .push_use_case(UseCaseRecord::new(use_case.name(), use_case.title()));
        Ok(())
    }

    /// Append a package or rectangle record with a summary of its direct
    /// actor and use case children.
    ///
    /// Nested groups are not summarized; they get their own record when the
    /// walker reaches them.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::MalformedNode`] if the group has no name.
    pub fn record_group(&mut self, group: &Group) -> Result<(), ProjectionError> {
        require_name(group.name(), group.kind().into(), group.title())?;
        let record = GroupRecord::new(group.name(), group.title(), summarize(group.elements()));
        self.projection.push_group(group.kind(), record);
        Ok(())
    }

    pub fn record_relationship(&mut self, relationship: ResolvedRelationship) {
        self.projection.push_relationship(relationship);
    }

    /// Consume the accumulator and return the finished projection.
    pub fn finish(self) -> Projection {
        self.projection
    }
}

fn summarize(elements: &[Element]) -> Vec<ElementSummary> {
    elements
        .iter()
        .map(classify)
        .filter_map(|variant| match variant {
            Variant::Actor(actor) => Some(ElementSummary::new(
                Category::Actor,
                actor.name(),
                actor.title(),
            )),
            Variant::UseCase(use_case) => Some(ElementSummary::new(
                Category::UseCase,
                use_case.name(),
                use_case.title(),
            )),
            Variant::Group(_) | Variant::Relationship(_) | Variant::Other(_) => None,
        })
        .collect()
}

fn require_name(name: &str, category: Category, title: &str) -> Result<(), ProjectionError> {
    if name.is_empty() {
        return Err(ProjectionError::MalformedNode {
            category,
            title: title.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use casemap_core::ast::{Composite, GroupKind, Relationship};

    #[test]
    fn test_records_keep_arrival_order() {
        let mut bucket = Bucket::new();
        bucket.record_actor(&Actor::new("B", "Bob")).unwrap();
        bucket.record_actor(&Actor::new("A", "Alice")).unwrap();
        bucket
            .record_use_case(&UseCase::new("U2", "Refund"))
            .unwrap();
        bucket.record_use_case(&UseCase::new("U1", "Pay")).unwrap();

        let projection = bucket.finish();
        let actors: Vec<&str> = projection.actors().iter().map(|a| a.name()).collect();
        let use_cases: Vec<&str> = projection.use_cases().iter().map(|u| u.name()).collect();
        assert_eq!(actors, vec!["B", "A"]);
        assert_eq!(use_cases, vec!["U2", "U1"]);
    }

    #[test]
    fn test_actor_record_copies_stereotypes() {
        let mut bucket = Bucket::new();
        let stereotypes = vec!["human".to_string()];
        let actor = Actor::new("SA", "SysAdmin").with_stereotypes(stereotypes.clone());
        bucket.record_actor(&actor).unwrap();

        assert_eq!(
            bucket.projection().actors(),
            [ActorRecord::new("SA", "SysAdmin", stereotypes)]
        );
    }

    #[test]
    fn test_group_summary_is_one_level_deep() {
        let inner = Group::package(
            "Inner",
            "Inner",
            vec![UseCase::new("Deep", "Grandchild").into()],
        );
        let group = Group::rectangle(
            "R",
            "System",
            vec![
                UseCase::new("U1", "Pay").into(),
                inner.into(),
                Relationship::new("A", "U1").into(),
                Composite::new("note")
                    .with_field("hidden", Element::from(Actor::new("H", "Hidden")))
                    .into(),
                Actor::new("A", "Alice").into(),
            ],
        );

        let mut bucket = Bucket::new();
        bucket.record_group(&group).unwrap();

        let projection = bucket.finish();
        assert!(projection.packages().is_empty());
        assert_eq!(
            projection.groups(GroupKind::Rectangle),
            [GroupRecord::new(
                "R",
                "System",
                vec![
                    ElementSummary::new(Category::UseCase, "U1", "Pay"),
                    ElementSummary::new(Category::Actor, "A", "Alice"),
                ],
            )]
        );
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let mut bucket = Bucket::new();

        let err = bucket.record_actor(&Actor::new("", "Nobody")).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::MalformedNode {
                category: Category::Actor,
                title: "Nobody".to_string(),
            }
        );

        let err = bucket
            .record_group(&Group::package("", "Anonymous", vec![]))
            .unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::MalformedNode {
                category: Category::Package,
                ..
            }
        ));

        assert!(bucket.finish().is_empty());
    }
}
