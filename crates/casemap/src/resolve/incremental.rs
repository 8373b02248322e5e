//! Incremental index resolver.

use std::collections::{HashMap, HashSet};

use log::trace;

use casemap_core::ast::{Actor, Group, Root, UseCase};

use crate::{
    error::ProjectionError,
    projection::{Category, Projection},
    resolve::Resolver,
    walk::{self, Visitor},
};

/// Resolves names through an index that grows as elements are classified.
///
/// The first category recorded for a name is kept; later declarations that
/// reuse the name do not overwrite it.
///
/// Names missing from the index fall back to the known actor and use case
/// names. Before the walk, [`prepare`](Resolver::prepare) seeds those sets
/// with every actor and use case reachable without entering a group, so an
/// ungrouped actor or use case declared after the relationship that names it
/// still resolves. A fallback hit is written back into the index. Packages,
/// rectangles, and elements inside groups the walker has not entered yet are
/// not covered by the fallback and resolve to [`Category::Unknown`].
#[derive(Debug, Default)]
pub struct IncrementalResolver {
    index: HashMap<String, Category>,
    actors: HashSet<String>,
    use_cases: HashSet<String>,
}

impl IncrementalResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The indexed category of `name`, without consulting the fallback.
    pub fn indexed(&self, name: &str) -> Option<Category> {
        self.index.get(name).copied()
    }

    fn fallback(&self, name: &str) -> Option<Category> {
        if self.actors.contains(name) {
            Some(Category::Actor)
        } else if self.use_cases.contains(name) {
            Some(Category::UseCase)
        } else {
            None
        }
    }
}

impl Resolver for IncrementalResolver {
    fn prepare(&mut self, root: &Root) -> Result<(), ProjectionError> {
        let mut seeds = UngroupedDeclarations {
            actors: &mut self.actors,
            use_cases: &mut self.use_cases,
        };
        walk::walk_root(root, &mut seeds)?;

        trace!(
            actors = self.actors.len(),
            use_cases = self.use_cases.len();
            "Seeded fallback names"
        );
        Ok(())
    }

    fn observe(&mut self, name: &str, category: Category) {
        self.index.entry(name.to_string()).or_insert(category);

        match category {
            Category::Actor => {
                self.actors.insert(name.to_string());
            }
            Category::UseCase => {
                self.use_cases.insert(name.to_string());
            }
            Category::Package | Category::Rectangle | Category::Unknown => {}
        }
    }

    fn resolve(&mut self, name: &str, _projection: &Projection) -> Category {
        if let Some(category) = self.indexed(name) {
            return category;
        }

        match self.fallback(name) {
            Some(category) => {
                trace!(name, category:?; "Resolved through fallback");
                self.index.insert(name.to_string(), category);
                category
            }
            None => Category::Unknown,
        }
    }
}

/// Collects actor and use case names that sit outside every group.
struct UngroupedDeclarations<'a> {
    actors: &'a mut HashSet<String>,
    use_cases: &'a mut HashSet<String>,
}

impl Visitor for UngroupedDeclarations<'_> {
    fn actor(&mut self, actor: &Actor) -> Result<(), ProjectionError> {
        self.actors.insert(actor.name().to_string());
        Ok(())
    }

    fn use_case(&mut self, use_case: &UseCase) -> Result<(), ProjectionError> {
        self.use_cases.insert(use_case.name().to_string());
        Ok(())
    }

    fn group(&mut self, _group: &Group) -> Result<bool, ProjectionError> {
        Ok(false)
    }
}
