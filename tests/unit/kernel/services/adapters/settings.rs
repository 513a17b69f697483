use super::*;
use tempfile::tempdir;

#[test]
fn default_settings_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.tab_size, Settings::default().tab_size);
    assert_eq!(settings.syntax_disable_secs, 30);
}

#[test]
fn existing_settings_file_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, r#"{ "tab_size": 8 }"#).unwrap();

    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().tab_size, 8);
}

#[test]
fn missing_or_malformed_settings_yield_none() {
    let dir = tempdir().unwrap();
    assert!(load_settings_from(&dir.path().join("absent.json")).is_none());

    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}
