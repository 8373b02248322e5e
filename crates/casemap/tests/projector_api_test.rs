//! Integration tests for the Projector API

use casemap::{
    CasemapError, Projector, config::AppConfig, projection::Category, render::OutputFormat,
    resolve::Strategy,
};

const FORWARD_REFERENCE: &str = r#"{
    "node": "Document",
    "diagrams": [
        {
            "node": "Diagram",
            "elements": [
                {"node": "Relationship", "left": "C1", "right": "UC1", "rightArrowHead": ">"},
                {"node": "Actor", "name": "C1", "title": "Client"},
                {"node": "UseCase", "name": "UC1", "title": "View Dashboard"}
            ]
        }
    ]
}"#;

const LATE_RELATIONSHIP: &str = r#"[
    {"node": "Diagram", "elements": [{"node": "Relationship", "left": "C1", "right": "X"}]}
]"#;

#[test]
fn test_projector_api_exists() {
    let _projector = Projector::default();
}

#[test]
fn test_load_project_render() {
    let projector = Projector::default();

    let root = projector
        .load(FORWARD_REFERENCE)
        .expect("Failed to load dump");
    let projection = projector.project(&root).expect("Failed to project");
    let json = projector.render(&projection).expect("Failed to render");

    assert_eq!(projection.actors().len(), 1);
    assert_eq!(projection.use_cases().len(), 1);
    assert!(json.starts_with("{\n  \"actors\""));
    assert!(json.contains("\"targetArrowHead\": \">\""));
}

#[test]
fn test_strategy_from_config() {
    let basic = Projector::new(AppConfig::default());
    let enriched = Projector::new(AppConfig::default().with_strategy(Strategy::Enriched));

    let root = basic.load(FORWARD_REFERENCE).expect("Failed to load dump");

    let basic_projection = basic.project(&root).expect("Failed to project");
    let rel = &basic_projection.relationships()[0];
    assert_eq!(rel.source_type(), Category::Unknown);
    assert_eq!(rel.target_type(), Category::Unknown);

    let enriched_projection = enriched.project(&root).expect("Failed to project");
    let rel = &enriched_projection.relationships()[0];
    assert_eq!(rel.source_type(), Category::Actor);
    assert_eq!(rel.target_type(), Category::UseCase);
}

#[test]
fn test_yaml_output_from_config() {
    let projector = Projector::new(AppConfig::default().with_format(OutputFormat::Yaml));
    assert_eq!(projector.config().output().format(), OutputFormat::Yaml);

    let root = projector
        .load(FORWARD_REFERENCE)
        .expect("Failed to load dump");
    let projection = projector.project(&root).expect("Failed to project");
    let yaml = projector.render(&projection).expect("Failed to render");

    assert!(yaml.starts_with("actors:"));
    assert!(yaml.contains("title: View Dashboard"));
}

#[test]
fn test_bare_diagram_array() {
    let dump = r#"[
        {"node": "Diagram", "elements": [{"node": "Actor", "name": "A"}]},
        {"node": "Diagram", "elements": [{"node": "UseCase", "name": "U", "title": "Pay"}]}
    ]"#;

    let projector = Projector::default();
    let root = projector.load(dump).expect("Failed to load dump");
    let projection = projector.project(&root).expect("Failed to project");

    assert_eq!(projection.actors()[0].title(), "A");
    assert_eq!(projection.use_cases()[0].name(), "U");
}

#[test]
fn test_invalid_json_returns_error() {
    let result = Projector::default().load("{ not json");
    assert!(matches!(result, Err(CasemapError::Ast(_))));
}

#[test]
fn test_invalid_root_returns_error() {
    let result = Projector::default().load(r#""just a string""#);
    assert!(matches!(result, Err(CasemapError::Ast(_))));
}

#[test]
fn test_nameless_actor_returns_error() {
    let projector = Projector::default();
    let root = projector
        .load(r#"[{"node": "Diagram", "elements": [{"node": "Actor", "title": "Ghost"}]}]"#)
        .expect("Failed to load dump");

    let err = projector
        .project(&root)
        .expect_err("Nameless actor should fail");
    assert!(matches!(err, CasemapError::Projection(_)));
    assert!(err.to_string().contains("Ghost"));
}

#[test]
fn test_projector_reusability() {
    let projector = Projector::new(AppConfig::default().with_strategy(Strategy::Enriched));

    let first = projector
        .load(FORWARD_REFERENCE)
        .expect("Failed to load dump");
    let second = projector
        .load(LATE_RELATIONSHIP)
        .expect("Failed to load dump");

    let first = projector.project(&first).expect("Failed to project");
    let second = projector.project(&second).expect("Failed to project");

    // Names seen in an earlier run do not leak into the next one.
    assert_eq!(first.relationships()[0].source_type(), Category::Actor);
    assert_eq!(second.relationships()[0].source_type(), Category::Unknown);
}
