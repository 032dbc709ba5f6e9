use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.version.is_none());
    assert!(config.scanner.exclude.is_empty());
    assert!(!config.scanner.report_unclassified);
    assert!(config.check.formats.is_empty());
    assert_eq!(config.check.jobs, 1);
    assert_eq!(config.check.timeout_secs, 0);
    assert_eq!(config.report.suite_name, "syntax");
    assert!(config.formats.is_empty());
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_toml_parses() {
    let content = r#"
version = "1"

[scanner]
exclude = ["vendor", ".git"]
exclude_globs = ["**/generated"]
report_unclassified = true

[check]
formats = ["python", "json"]
jobs = 4
timeout_secs = 30

[report]
suite_name = "lint"

[formats.shell]
extensions = [".sh", ".bash", ".zsh"]

[formats.toml]
extensions = [".toml"]
command = ["taplo", "check", "{path}"]
"#;

    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.scanner.exclude, vec!["vendor", ".git"]);
    assert_eq!(config.scanner.exclude_globs, vec!["**/generated"]);
    assert!(config.scanner.report_unclassified);
    assert_eq!(config.check.formats, vec!["python", "json"]);
    assert_eq!(config.check.jobs, 4);
    assert_eq!(config.check.timeout_secs, 30);
    assert_eq!(config.report.suite_name, "lint");

    let names: Vec<_> = config.formats.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["shell", "toml"]);
    assert!(config.formats["shell"].command.is_none());
    assert_eq!(
        config.formats["toml"].command.as_deref(),
        Some(&["taplo".to_string(), "check".to_string(), "{path}".to_string()][..])
    );
}

#[test]
fn wrong_field_type_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[check]\njobs = \"many\"\n");
    assert!(result.is_err());
}
