//! Post-hoc scan resolver.

use crate::{
    projection::{Category, Projection},
    resolve::Resolver,
};

/// Resolves names by scanning the projection built so far.
///
/// Search order: actors, use cases, then every package followed by every
/// rectangle. For each group its own name is checked before the summaries of
/// its direct children. The first match wins.
///
/// Keeps no state of its own, so a name whose declaration the walker has not
/// reached yet resolves to [`Category::Unknown`]. The one exception is a child
/// of a group already entered: group summaries are built when the group is
/// recorded, before its children are walked.
#[derive(Debug, Default)]
pub struct PostHocResolver;

impl PostHocResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for PostHocResolver {
    fn resolve(&mut self, name: &str, projection: &Projection) -> Category {
        if projection.actors().iter().any(|actor| actor.name() == name) {
            return Category::Actor;
        }

        if projection
            .use_cases()
            .iter()
            .any(|use_case| use_case.name() == name)
        {
            return Category::UseCase;
        }

        let groups = [
            (projection.packages(), Category::Package),
            (projection.rectangles(), Category::Rectangle),
        ];
        for (records, category) in groups {
            for group in records {
                if group.name() == name {
                    return category;
                }
                if let Some(summary) = group.elements().iter().find(|el| el.name() == name) {
                    return summary.category();
                }
            }
        }

        Category::Unknown
    }
}
