use super::*;

#[test]
fn empty_json_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.default_language, None);
    assert_eq!(settings.tab_size, 4);
    assert_eq!(settings.base_font_px, 14.0);
    assert_eq!(settings.syntax_disable_secs, 30);
    assert!(settings.error_patterns.is_empty());
    assert_eq!(
        settings.syntax_disable_duration(),
        std::time::Duration::from_secs(30)
    );
}

#[test]
fn fields_deserialize_from_json() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "default_language": "java",
            "tab_size": 2,
            "syntax_disable_secs": 5,
            "error_patterns": { "python": "at line (\\d+)" }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.default_language, Some(LanguageId::Java));
    assert_eq!(settings.tab_size, 2);
    assert_eq!(settings.syntax_disable_secs, 5);
    assert_eq!(settings.error_patterns["python"], r"at line (\d+)");
}

#[test]
fn build_registry_applies_overrides() {
    let mut settings = Settings::default();
    settings
        .error_patterns
        .insert("java".to_string(), r"Line (\d+)".to_string());

    let registry = settings.build_registry().unwrap();
    assert_eq!(registry.error_pattern(LanguageId::Java).as_str(), r"Line (\d+)");
    assert_eq!(
        registry.error_pattern(LanguageId::Go).as_str(),
        LanguageId::Go.builtin_error_pattern()
    );
}

#[test]
fn build_registry_reports_bad_overrides() {
    let mut settings = Settings::default();
    settings
        .error_patterns
        .insert("fortran".to_string(), r"(\d+)".to_string());
    assert!(matches!(
        settings.build_registry(),
        Err(ConfigError::UnknownLanguage(name)) if name == "fortran"
    ));

    let mut settings = Settings::default();
    settings
        .error_patterns
        .insert("cpp".to_string(), r"(\d+".to_string());
    let err = settings.build_registry().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidPattern {
            language: LanguageId::Cpp,
            ..
        }
    ));
    assert!(err.to_string().starts_with("Invalid error pattern for cpp"));
}
