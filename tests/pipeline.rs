//! End-to-end pipeline tests over an in-memory document store.

use std::collections::HashMap;

use schemars::JsonSchema;
use schemaform::{FieldKind, FormError, FormPipeline, MemoryLoader, harvest};
use serde_json::json;

fn person_store() -> MemoryLoader {
    MemoryLoader::new()
        .with(
            "person.json",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "title": "Full name"},
                    "age": {"type": "integer"},
                    "born": {"type": "string", "format": "date-time"},
                    "home": {"$ref": "address.json"},
                    "work": {"$ref": "address.json"}
                },
                "required": ["name", "age"]
            }),
        )
        .with(
            "address.json",
            json!({
                "type": "object",
                "title": "Address",
                "properties": {
                    "city": {"type": "string"},
                    "country": {"$ref": "country.json"}
                },
                "required": ["city"]
            }),
        )
        .with(
            "country.json",
            json!({"type": "string", "enum": ["NO", "SE", "DK"]}),
        )
}

#[tokio::test]
async fn builds_form_across_shared_documents() {
    let pipeline = FormPipeline::new(person_store());
    let fields = pipeline.build("person.json").await.unwrap();

    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0].label, "Full name");
    assert!(fields[0].required);
    assert!(matches!(fields[1].kind, FieldKind::Integer));
    assert!(matches!(fields[2].kind, FieldKind::DateTime));

    // Both branches expanded the same shared document.
    for (idx, prefix) in [(3, "home"), (4, "work")] {
        assert_eq!(fields[idx].label, "Address");
        let FieldKind::Group { children } = &fields[idx].kind else {
            panic!("expected group at {prefix}");
        };
        assert_eq!(children[0].name, format!("{prefix}.city"));
        assert!(children[0].required);
        let FieldKind::Select { options } = &children[1].kind else {
            panic!("expected select at {prefix}.country");
        };
        assert_eq!(options, &vec![json!("NO"), json!("SE"), json!("DK")]);
    }
}

#[tokio::test]
async fn renders_and_harvests_with_matching_names() {
    let pipeline = FormPipeline::new(person_store());
    let fields = pipeline.build("person.json").await.unwrap();

    let html = pipeline.render_html("person.json").await.unwrap();
    assert!(html.contains("name=\"home.city\""));
    assert!(html.contains("name=\"work.country\""));

    let raw = HashMap::from([
        ("name".to_string(), "Ada".to_string()),
        ("born".to_string(), "1815-12-10T09:00".to_string()),
        ("home.city".to_string(), "London".to_string()),
    ]);
    let values = harvest(&fields, &raw);
    assert_eq!(values["name"], json!("Ada"));
    assert_eq!(values["born"], json!("1815-12-10T09:00:00+00:00"));
    assert_eq!(values["home.city"], json!("London"));
}

#[tokio::test]
async fn cyclic_document_graph_fails_whole_pipeline() {
    let loader = MemoryLoader::new()
        .with("a.json", json!({"properties": {"b": {"$ref": "b.json"}}}))
        .with("b.json", json!({"properties": {"a": {"$ref": "a.json"}}}));

    let pipeline = FormPipeline::new(loader);
    let err = pipeline.build("a.json").await.unwrap_err();
    assert!(matches!(err, FormError::CircularReference { .. }));
}

#[tokio::test]
async fn missing_referenced_document_fails_whole_pipeline() {
    let loader = MemoryLoader::new().with(
        "root.json",
        json!({"properties": {"x": {"$ref": "gone.json"}}}),
    );
    let pipeline = FormPipeline::new(loader);
    let err = pipeline.build("root.json").await.unwrap_err();
    assert!(matches!(err, FormError::Load { ref path, .. } if path == "gone.json"));
}

#[tokio::test]
async fn non_mapping_root_yields_placeholder_not_error() {
    let loader = MemoryLoader::new().with("root.json", json!("just a string"));
    let pipeline = FormPipeline::new(loader);
    let fields = pipeline.build("root.json").await.unwrap();
    assert_eq!(fields.len(), 1);
    assert!(matches!(fields[0].kind, FieldKind::Invalid));
}

#[tokio::test]
async fn builds_form_from_derived_schema() {
    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct ServerConfig {
        host: String,
        port: u16,
    }

    let schema = serde_json::to_value(schemars::schema_for!(ServerConfig)).unwrap();
    let loader = MemoryLoader::new().with("server.json", schema);

    let pipeline = FormPipeline::new(loader);
    let fields = pipeline.build("server.json").await.unwrap();

    assert_eq!(fields.len(), 2);
    let host = fields.iter().find(|f| f.name == "host").unwrap();
    let port = fields.iter().find(|f| f.name == "port").unwrap();
    assert!(matches!(host.kind, FieldKind::Text));
    assert!(host.required);
    assert!(matches!(port.kind, FieldKind::Integer));
    assert!(port.required);
}
