//! The projection engine.
//!
//! One walk over the AST drives everything: declarations go to the
//! [`Bucket`] and are reported to the [`Resolver`], relationships are resolved
//! against whatever the resolver knows at that point and then bucketed too.

use log::{debug, info, trace};

use casemap_core::ast::{Actor, Group, Relationship, Root, UseCase};

use crate::{
    bucket::Bucket,
    error::ProjectionError,
    projection::{Category, Projection},
    relationship,
    resolve::{Resolver, Strategy},
    walk::{self, Visitor},
};

/// Project `root` using a fresh resolver for `strategy`.
///
/// # Errors
///
/// Returns [`ProjectionError::MalformedNode`] if a declaration has no name.
pub fn project(root: &Root, strategy: Strategy) -> Result<Projection, ProjectionError> {
    let mut resolver = strategy.resolver();
    project_with(root, resolver.as_mut())
}

/// Project `root` using the given resolver.
///
/// The resolver should be fresh; state left over from an earlier run would
/// leak into this one.
///
/// # Errors
///
/// Returns [`ProjectionError::MalformedNode`] if a declaration has no name.
pub fn project_with(
    root: &Root,
    resolver: &mut dyn Resolver,
) -> Result<Projection, ProjectionError> {
    info!(diagrams = root.diagrams().len(); "Projecting document");

    resolver.prepare(root)?;

    let mut engine = Engine {
        bucket: Bucket::new(),
        resolver,
    };
    walk::walk_root(root, &mut engine)?;
    let projection = engine.bucket.finish();

    info!(
        actors = projection.actors().len(),
        usecases = projection.use_cases().len(),
        packages = projection.packages().len(),
        rectangles = projection.rectangles().len(),
        relationships = projection.relationships().len();
        "Projection complete"
    );
    trace!(projection:?; "Projected document");

    Ok(projection)
}

struct Engine<'r> {
    bucket: Bucket,
    resolver: &'r mut dyn Resolver,
}

impl Visitor for Engine<'_> {
    fn actor(&mut self, actor: &Actor) -> Result<(), ProjectionError> {
        self.bucket.record_actor(actor)?;
        self.resolver.observe(actor.name(), Category::Actor);
        Ok(())
    }

    fn use_case(&mut self, use_case: &UseCase) -> Result<(), ProjectionError> {
        self.bucket.record_use_case(use_case)?;
        self.resolver.observe(use_case.name(), Category::UseCase);
        Ok(())
    }

    fn group(&mut self, group: &Group) -> Result<bool, ProjectionError> {
        debug!(
            kind = group.kind().to_string(),
            name = group.name(),
            children = group.elements().len();
            "Entering group"
        );
        self.bucket.record_group(group)?;
        self.resolver.observe(group.name(), group.kind().into());
        Ok(true)
    }

    fn relationship(&mut self, rel: &Relationship) -> Result<(), ProjectionError> {
        let Self { bucket, resolver } = self;
        let resolved = relationship::resolve(rel, |name| {
            let category = resolver.resolve(name, bucket.projection());
            if !category.is_known() {
                debug!(endpoint = name; "Unresolved relationship endpoint");
            }
            category
        });
        bucket.record_relationship(resolved);
        Ok(())
    }
}
