use visage_cli::commands::run_select;
use visage_engines::{Settings, SettingsError};

#[test]
fn select_moves_the_selection_and_returns_the_row() {
    let outcome = run_select(
        Settings::builtin(),
        "d733c7a4-7da4-47d4-aa25-289b9a479819",
    )
    .unwrap();

    assert_eq!(outcome.engine.name, "Facenet (ours)");
    let selected: Vec<&str> = outcome
        .settings
        .entries()
        .iter()
        .filter(|entity| entity.is_selected)
        .map(|entity| entity.uuid.as_str())
        .collect();
    assert_eq!(selected, ["d733c7a4-7da4-47d4-aa25-289b9a479819"]);
}

#[test]
fn select_keeps_catalog_order() {
    let outcome = run_select(
        Settings::builtin(),
        "6cf3b728-4cf9-4262-b4b2-315c019515de",
    )
    .unwrap();

    let names: Vec<&str> = outcome
        .settings
        .entries()
        .iter()
        .map(|entity| entity.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Vision Labs Platform",
            "NTech Platform",
            "Tevian Platform",
            "Facenet (ours)",
        ]
    );
}

#[test]
fn select_unknown_uuid_surfaces_the_error() {
    let err = run_select(Settings::builtin(), "missing").unwrap_err();
    match err {
        SettingsError::UnknownEngine { uuid } => assert_eq!(uuid, "missing"),
        other => panic!("unexpected error: {:?}", other),
    }
}
