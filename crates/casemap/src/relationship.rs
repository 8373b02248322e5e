//! Conversion of relationship nodes into resolved records.

use casemap_core::ast::Relationship;

use crate::projection::{Category, ResolvedRelationship};

/// Build the output record for `relationship`, resolving both endpoints
/// through `lookup`.
///
/// The left endpoint is resolved first. A missing label becomes the empty
/// string; missing arrow metadata and relationship kind stay absent.
pub fn resolve<F>(relationship: &Relationship, mut lookup: F) -> ResolvedRelationship
where
    F: FnMut(&str) -> Category,
{
    let source_type = lookup(relationship.left());
    let target_type = lookup(relationship.right());

    ResolvedRelationship::new(
        relationship.left(),
        relationship.right(),
        source_type,
        target_type,
    )
    .with_relationship_type(relationship.relationship_type().map(str::to_string))
    .with_label(relationship.label().unwrap_or_default())
    .with_arrow_heads(
        relationship.left_arrow_head().map(str::to_string),
        relationship.right_arrow_head().map(str::to_string),
    )
    .with_arrow_bodies(
        relationship.left_arrow_body().map(str::to_string),
        relationship.right_arrow_body().map(str::to_string),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_metadata() {
        let rel = resolve(&Relationship::new("C1", "UC1"), |name| match name {
            "C1" => Category::Actor,
            _ => Category::UseCase,
        });

        assert_eq!(
            rel,
            ResolvedRelationship::new("C1", "UC1", Category::Actor, Category::UseCase)
        );
        assert_eq!(rel.label(), "");
        assert_eq!(rel.source_arrow_head(), None);
        assert_eq!(rel.relationship_type(), None);
    }

    #[test]
    fn test_left_maps_to_source_and_right_to_target() {
        let relationship = Relationship::new("UC2", "UC1")
            .with_label("extends")
            .with_arrow_heads(Some("<".to_string()), None)
            .with_arrow_bodies(Some(".".to_string()), Some("-".to_string()))
            .with_relationship_type("extends");

        let rel = resolve(&relationship, |_| Category::UseCase);

        assert_eq!(rel.source(), "UC2");
        assert_eq!(rel.target(), "UC1");
        assert_eq!(rel.label(), "extends");
        assert_eq!(rel.source_arrow_head(), Some("<"));
        assert_eq!(rel.target_arrow_head(), None);
        assert_eq!(rel.source_arrow_body(), Some("."));
        assert_eq!(rel.target_arrow_body(), Some("-"));
        assert_eq!(rel.relationship_type(), Some("extends"));
    }

    #[test]
    fn test_lookup_order_is_source_then_target() {
        let mut asked = Vec::new();
        let rel = resolve(&Relationship::new("L", "R"), |name| {
            asked.push(name.to_string());
            Category::Unknown
        });

        assert_eq!(asked, vec!["L", "R"]);
        assert_eq!(rel.source_type(), Category::Unknown);
        assert_eq!(rel.target_type(), Category::Unknown);
    }
}
