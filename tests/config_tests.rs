use std::io::Write;
use tempfile::NamedTempFile;

use formcheck::util::config::AppConfig;
use formcheck::validation::{PasswordPolicy, validate_password};

fn write_config(toml: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    f
}

#[test]
fn test_load_full_config() {
    let f = write_config(
        r#"
[password]
min_length = 12
max_length = 64
require_mixed_case = false
require_number = false

[forms]
default_field_name = "入力欄"
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.password.min_length, 12);
    assert_eq!(config.password.max_length, 64);
    assert!(!config.password.require_mixed_case);
    assert!(!config.password.require_number);
    assert_eq!(config.forms.default_field_name, "入力欄");
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let f = write_config(
        r#"
[password]
min_length = 10
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.password.min_length, 10);
    assert_eq!(config.password.max_length, 100);
    assert!(config.password.require_mixed_case);
    assert!(config.password.require_number);
    assert_eq!(config.forms.default_field_name, "項目");
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let f = write_config("");

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.password, PasswordPolicy::default());
    assert_eq!(config.forms.default_field_name, "項目");
}

#[test]
fn test_loaded_policy_drives_validation() {
    let f = write_config(
        r#"
[password]
min_length = 4
require_number = false
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(validate_password("AbCd", &config.password), None);
}

#[test]
fn test_load_rejects_zero_min_length() {
    let f = write_config(
        r#"
[password]
min_length = 0
"#,
    );
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_load_rejects_max_below_min() {
    let f = write_config(
        r#"
[password]
min_length = 20
max_length = 10
"#,
    );
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let f = write_config("this is not [valid toml {{");
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.password.min_length, 8);
    assert_eq!(config.password.max_length, 100);
    assert!(config.password.require_mixed_case);
    assert!(config.password.require_number);
    assert_eq!(config.forms.default_field_name, "項目");
}
