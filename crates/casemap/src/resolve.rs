//! Name resolution for relationship endpoints.
//!
//! A relationship names its endpoints; the projection reports what kind of
//! element each name refers to. How a name is looked up is pluggable through
//! the [`Resolver`] trait, with two implementations selectable via
//! [`Strategy`]:
//!
//! - [`PostHocResolver`] (`basic`): scans what has been projected so far.
//! - [`IncrementalResolver`] (`enriched`): keeps a name index updated as
//!   elements are classified, with a fallback for actors and use cases
//!   declared outside any group.
//!
//! Both are order-dependent. A name that cannot be resolved at the moment a
//! relationship is reached becomes [`Category::Unknown`] and is never
//! revisited.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use casemap_core::ast::Root;

use crate::{
    error::ProjectionError,
    projection::{Category, Projection},
};

mod incremental;
mod post_hoc;

pub use incremental::IncrementalResolver;
pub use post_hoc::PostHocResolver;

/// Endpoint lookup capability injected into the projection engine.
pub trait Resolver {
    /// Called once with the traversal root before the walk starts.
    ///
    /// # Errors
    ///
    /// Implementations that walk the root propagate walker errors.
    fn prepare(&mut self, _root: &Root) -> Result<(), ProjectionError> {
        Ok(())
    }

    /// Called after an actor, use case, or group has been recorded.
    fn observe(&mut self, _name: &str, _category: Category) {}

    /// Resolve an endpoint name against the state built so far.
    ///
    /// Never fails; unresolvable names yield [`Category::Unknown`].
    fn resolve(&mut self, name: &str, projection: &Projection) -> Category;
}

/// Selectable resolution strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Post-hoc scan of the projection built so far.
    #[default]
    Basic,
    /// Incremental name index with an actor/use case fallback.
    Enriched,
}

impl Strategy {
    /// Create a fresh resolver for one projection run.
    pub fn resolver(self) -> Box<dyn Resolver> {
        match self {
            Strategy::Basic => Box::new(PostHocResolver::new()),
            Strategy::Enriched => Box::new(IncrementalResolver::new()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Strategy::Basic),
            "enriched" => Ok(Strategy::Enriched),
            _ => Err(format!(
                "Invalid strategy `{s}`, expected `basic` or `enriched`"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Basic => write!(f, "basic"),
            Strategy::Enriched => write!(f, "enriched"),
        }
    }
}
