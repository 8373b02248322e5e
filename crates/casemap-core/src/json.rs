//! Decoding of the parser's JSON AST dump.
//!
//! The external parser serializes its tree as JSON where every node object
//! carries its kind under the `"node"` key:
//!
//! ```json
//! {
//!   "node": "Document",
//!   "diagrams": [
//!     {
//!       "node": "Diagram",
//!       "elements": [
//!         { "node": "Actor", "name": "C1", "title": "Client" },
//!         { "node": "UseCase", "name": "UC1", "title": "View Dashboard" },
//!         { "node": "Relationship", "left": "C1", "right": "UC1", "rightArrowHead": ">" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Decoding is lenient. Objects with an unknown or missing `"node"` become
//! [`Composite`] nodes, missing titles fall back to the name, and a missing
//! name decodes to an empty identity that the projection engine reports.
//!
//! # Example
//!
//! ```
//! # use casemap_core::{ast::Element, json};
//! let root = json::from_str(
//!     r#"[{"node": "Diagram", "elements": [{"node": "Actor", "name": "C1"}]}]"#,
//! )
//! .expect("valid dump");
//!
//! let Element::Actor(actor) = &root.diagrams()[0].elements()[0] else {
//!     panic!("expected an actor");
//! };
//! assert_eq!(actor.title(), "C1");
//! ```

use log::debug;
use serde_json::{Map, Value as JsonValue};

use crate::{
    AstError,
    ast::{
        Actor, Composite, Diagram, Document, Element, Group, GroupKind, Relationship, Root, Scalar,
        UseCase, Value,
    },
};

/// Key holding a node's kind.
pub const NODE_KEY: &str = "node";

const DOCUMENT: &str = "Document";
const DIAGRAM: &str = "Diagram";
const ACTOR: &str = "Actor";
const USE_CASE: &str = "UseCase";
const GROUP: &str = "Group";
const RELATIONSHIP: &str = "Relationship";

/// Composite kind used for objects without a `"node"` key.
const ANONYMOUS_KIND: &str = "object";

type JsonMap = Map<String, JsonValue>;

/// Decode a JSON AST dump from text.
///
/// # Errors
///
/// Returns [`AstError::Json`] if `source` is not valid JSON, or
/// [`AstError::InvalidRoot`] if the root is neither a `Document` object nor
/// an array of diagrams.
pub fn from_str(source: &str) -> Result<Root, AstError> {
    let value: JsonValue = serde_json::from_str(source)?;
    from_value(&value)
}

/// Decode an already-parsed JSON AST dump.
///
/// # Errors
///
/// Returns [`AstError::InvalidRoot`] if the root is neither a `Document`
/// object nor an array of diagrams.
pub fn from_value(value: &JsonValue) -> Result<Root, AstError> {
    match value {
        JsonValue::Array(items) => Ok(Root::Diagrams(decode_diagrams(items))),
        JsonValue::Object(map) if node_kind(map) == Some(DOCUMENT) => {
            let diagrams = map
                .get("diagrams")
                .and_then(JsonValue::as_array)
                .map(|items| decode_diagrams(items))
                .unwrap_or_default();
            Ok(Root::Document(Document::new(diagrams)))
        }
        other => Err(AstError::InvalidRoot {
            found: describe(other),
        }),
    }
}

fn decode_diagrams(items: &[JsonValue]) -> Vec<Diagram> {
    items
        .iter()
        .filter_map(|item| match item.as_object() {
            Some(map) if node_kind(map) == Some(DIAGRAM) => Some(decode_diagram(map)),
            _ => {
                debug!(found = describe(item); "Skipping non-diagram entry");
                None
            }
        })
        .collect()
}

fn decode_diagram(map: &JsonMap) -> Diagram {
    Diagram::new(decode_elements(map.get("elements")))
}

fn decode_elements(value: Option<&JsonValue>) -> Vec<Element> {
    let Some(items) = value.and_then(JsonValue::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item.as_object() {
            Some(map) => Some(decode_element(map)),
            None => {
                debug!(found = describe(item); "Skipping non-object element entry");
                None
            }
        })
        .collect()
}

fn decode_element(map: &JsonMap) -> Element {
    match node_kind(map) {
        Some(ACTOR) => {
            let (name, title) = identity(map);
            Actor::new(name, title)
                .with_stereotypes(stereotypes(map))
                .into()
        }
        Some(USE_CASE) => {
            let (name, title) = identity(map);
            UseCase::new(name, title).into()
        }
        Some(GROUP) => match get_str(map, "type").map(str::parse::<GroupKind>) {
            Some(Ok(kind)) => {
                let (name, title) = identity(map);
                Group::new(kind, name, title, decode_elements(map.get("elements"))).into()
            }
            _ => {
                debug!(
                    group_type:? = get_str(map, "type");
                    "Decoding group of unsupported type as composite"
                );
                decode_composite(map).into()
            }
        },
        Some(RELATIONSHIP) => decode_relationship(map).into(),
        _ => decode_composite(map).into(),
    }
}

fn decode_relationship(map: &JsonMap) -> Relationship {
    let mut relationship = Relationship::new(
        get_string(map, "left").unwrap_or_default(),
        get_string(map, "right").unwrap_or_default(),
    )
    .with_arrow_heads(
        get_string(map, "leftArrowHead"),
        get_string(map, "rightArrowHead"),
    )
    .with_arrow_bodies(
        get_string(map, "leftArrowBody"),
        get_string(map, "rightArrowBody"),
    );

    if let Some(label) = get_string(map, "label") {
        relationship = relationship.with_label(label);
    }
    if let Some(relationship_type) = get_string(map, "relationshipType") {
        relationship = relationship.with_relationship_type(relationship_type);
    }

    relationship
}

fn decode_composite(map: &JsonMap) -> Composite {
    let kind = node_kind(map).unwrap_or(ANONYMOUS_KIND);
    if kind != ANONYMOUS_KIND {
        debug!(kind = kind; "Decoding unrecognized node as composite");
    }

    map.iter()
        .filter(|(key, _)| key.as_str() != NODE_KEY)
        .fold(Composite::new(kind), |composite, (key, value)| {
            composite.with_field(key.as_str(), decode_value(value))
        })
}

fn decode_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Scalar::Null.into(),
        JsonValue::Bool(flag) => Scalar::Bool(*flag).into(),
        JsonValue::Number(number) => number.as_f64().map_or(Scalar::Null, Scalar::Number).into(),
        JsonValue::String(text) => Scalar::Text(text.clone()).into(),
        JsonValue::Array(items) => Value::List(items.iter().map(decode_value).collect()),
        JsonValue::Object(map) => decode_element(map).into(),
    }
}

/// Name and title of a declaration; the title defaults to the name.
fn identity(map: &JsonMap) -> (String, String) {
    let name = get_string(map, "name").unwrap_or_default();
    let title = get_string(map, "title").unwrap_or_else(|| name.clone());
    (name, title)
}

/// Stereotypes may be dumped as a single string or a list of strings.
fn stereotypes(map: &JsonMap) -> Vec<String> {
    match map.get("stereotype") {
        Some(JsonValue::String(single)) => vec![single.clone()],
        Some(JsonValue::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn node_kind(map: &JsonMap) -> Option<&str> {
    get_str(map, NODE_KEY)
}

fn get_str<'a>(map: &'a JsonMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(JsonValue::as_str)
}

fn get_string(map: &JsonMap, key: &str) -> Option<String> {
    get_str(map, key).map(str::to_string)
}

fn describe(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
