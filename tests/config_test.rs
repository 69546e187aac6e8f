use chessrank::config::{label_from_id, EventConfig, FetchParams, SectionConfig};
use chessrank::error::RankError;
use rstest::rstest;
use std::io::Write;
use std::path::PathBuf;

const EVENT_JSON: &str = r#"{
    "base_url": "https://example.org/chess/events/intern/",
    "sections": [
        { "id": "blok-1" },
        { "id": "blok-2", "label": "Tweede blok" },
        { "id": "rapid", "url": "https://example.org/rapid/standings" }
    ],
    "widget": { "title": "Clubkampioenschap" },
    "output": { "dir": "site", "csv": "season.csv" }
}"#;

#[test]
fn test_load_event_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EVENT_JSON.as_bytes()).unwrap();

    let config = EventConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.sections.len(), 3);
    assert_eq!(config.widget.title, "Clubkampioenschap");
    assert_eq!(
        config.widget.subtitle,
        "Gecombineerde resultaten van alle blokken"
    );
    assert_eq!(config.output.dir, PathBuf::from("site"));
    assert_eq!(config.output.html, "standings.html");
    assert_eq!(config.output.csv.as_deref(), Some("season.csv"));
}

#[test]
fn test_section_urls_are_derived_from_base() {
    let config = EventConfig::from_json(EVENT_JSON).unwrap();
    let urls: Vec<&str> = config
        .sections
        .iter()
        .map(|s| s.url.as_deref().unwrap())
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://example.org/chess/events/intern/standings/section/blok-1",
            "https://example.org/chess/events/intern/standings/section/blok-2",
            "https://example.org/rapid/standings",
        ]
    );
}

#[test]
fn test_labels() {
    let config = EventConfig::from_json(EVENT_JSON).unwrap();
    assert_eq!(config.labels(), vec!["Blok 1", "Tweede blok", "Rapid"]);
}

#[rstest]
#[case("blok-1", "Blok 1")]
#[case("najaar_2025", "Najaar 2025")]
#[case("A", "A")]
#[case("", "")]
fn test_label_from_id(#[case] id: &str, #[case] expected: &str) {
    assert_eq!(label_from_id(id), expected);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = EventConfig::from_json(
        r#"{ "sections": [ { "id": "a", "url": "https://example.org/a" } ] }"#,
    )
    .unwrap();

    assert!(config.base_url.is_none());
    assert_eq!(config.widget.title, "🏆 Seizoenstand");
    assert_eq!(config.output.dir, PathBuf::from("public"));
    assert_eq!(config.output.json, "standings.json");
    assert_eq!(config.output.widget_json, "tornelo-data.json");
    assert!(config.output.csv.is_none());
}

#[rstest]
#[case::no_sections(r#"{ "base_url": "https://x", "sections": [] }"#)]
#[case::empty_id(r#"{ "base_url": "https://x", "sections": [ { "id": " " } ] }"#)]
#[case::duplicate_id(r#"{ "base_url": "https://x", "sections": [ { "id": "a" }, { "id": "a" } ] }"#)]
#[case::no_url_no_base(r#"{ "sections": [ { "id": "a" } ] }"#)]
fn test_invalid_configs(#[case] json: &str) {
    let err = EventConfig::from_json(json).unwrap_err();
    assert!(matches!(err, RankError::Config(_)), "got {:?}", err);
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let err = EventConfig::from_json("{ sections: ").unwrap_err();
    assert!(matches!(err, RankError::Json(_)));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = EventConfig::load_from_file("/definitely/not/here/event.json").unwrap_err();
    match err {
        RankError::Config(msg) => assert!(msg.contains("event.json")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_resolve_keeps_explicit_url() {
    let mut config = EventConfig {
        base_url: Some("https://example.org".into()),
        sections: vec![SectionConfig {
            url: Some("https://other.org/x".into()),
            ..SectionConfig::new("x")
        }],
        widget: Default::default(),
        output: Default::default(),
    };
    config.resolve().unwrap();
    assert_eq!(config.sections[0].url.as_deref(), Some("https://other.org/x"));
}

#[test]
fn test_fetch_defaults() {
    let params = FetchParams::default();
    assert_eq!(params.timeout_secs, 30);
    assert_eq!(params.cache_minutes, 30);
    assert!(params.cache_dir.is_none());
    assert!(params.user_agent.starts_with("Mozilla/5.0"));
}
