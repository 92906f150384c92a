use visage_cli::commands::{run_list, run_selected, run_show};
use visage_engines::{
    Engine, EngineEntity, ResolvedSettingsWithSource, Settings, SettingsError,
};

#[test]
fn list_returns_rows_in_catalog_order() {
    let resolved = ResolvedSettingsWithSource {
        settings: Settings::builtin(),
        source: None,
    };

    let outcome = run_list(&resolved);
    assert!(outcome.source.is_none());
    assert_eq!(outcome.engines.len(), 4);
    assert_eq!(outcome.engines[0].name, "Vision Labs Platform");
    assert_eq!(outcome.engines[3].name, "Facenet (ours)");
}

#[test]
fn list_carries_the_catalog_source_through() {
    let resolved = ResolvedSettingsWithSource {
        settings: Settings::builtin(),
        source: Some("/etc/visage/engines.toml".into()),
    };

    let outcome = run_list(&resolved);
    assert_eq!(
        outcome.source.as_deref(),
        Some(std::path::Path::new("/etc/visage/engines.toml"))
    );
}

#[test]
fn show_finds_an_engine_by_uuid() {
    let settings = Settings::builtin();
    let outcome = run_show(&settings, "3aac91d1-319f-46d8-bd52-35693457f498").unwrap();
    assert_eq!(outcome.engine.engine, Engine::Tevian);
    assert_eq!(outcome.engine.name, "Tevian Platform");
}

#[test]
fn show_unknown_uuid_surfaces_the_error() {
    let settings = Settings::builtin();
    let err = run_show(&settings, "no-such-engine").unwrap_err();
    match err {
        SettingsError::UnknownEngine { uuid } => assert_eq!(uuid, "no-such-engine"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn selected_reports_the_default_luna_entry() {
    let settings = Settings::builtin();
    let outcome = run_selected(&settings);
    let engine = outcome.engine.expect("default catalog has a selection");
    assert_eq!(engine.engine, Engine::Luna);
    assert_eq!(engine.uuid, "2a2a5e3b-29c6-426f-97cc-d9e1fb701ad3");
}

#[test]
fn selected_is_none_for_a_catalog_without_selection() {
    let settings = Settings::new(vec![EngineEntity {
        engine: Engine::Ntech,
        name: "NTech Platform".into(),
        uuid: "6cf3b728-4cf9-4262-b4b2-315c019515de".into(),
        is_selected: false,
    }]);

    let outcome = run_selected(&settings);
    assert!(outcome.engine.is_none());
}
