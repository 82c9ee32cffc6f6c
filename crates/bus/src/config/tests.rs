use std::io::Write;
use std::time::Duration;

use super::*;

#[test]
fn test_empty_document_uses_defaults() {
	let config = DispatchConfig::from_toml_str("").unwrap();
	assert_eq!(config, DispatchConfig::default());
	assert_eq!(config.max_nesting_depth, 16);
	assert_eq!(config.fault_policy, FaultPolicy::Suppress);
	assert!(config.slow_observer_threshold().is_none());
}

#[test]
fn test_parses_all_fields() {
	let config = DispatchConfig::from_toml_str(
		r#"
slow_observer_ms = 5
max_nesting_depth = 2
fault_policy = "inspect"
"#,
	)
	.unwrap();
	assert_eq!(config.slow_observer_threshold(), Some(Duration::from_millis(5)));
	assert_eq!(config.max_nesting_depth, 2);
	assert_eq!(config.fault_policy, FaultPolicy::Inspect);
}

#[test]
fn test_rejects_unknown_fields() {
	let err = DispatchConfig::from_toml_str("retries = 3").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_rejects_unknown_policy() {
	assert!(DispatchConfig::from_toml_str(r#"fault_policy = "retry""#).is_err());
}

#[test]
fn test_load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "max_nesting_depth = 4").unwrap();
	let config = DispatchConfig::load(file.path()).unwrap();
	assert_eq!(config.max_nesting_depth, 4);
}

#[test]
fn test_load_missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");
	match DispatchConfig::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected io error, got {other:?}"),
	}
}
