use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::Builder;

use colony_counter::config::{CounterConfig, ReportFormat};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "COLONY_CONFIG",
        "COLONY_OUTPUT_DIR",
        "COLONY_WRITE_ANNOTATED",
        "COLONY_REPORT_FORMAT",
        "COLONY_MAX_UPLOAD_BYTES",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn loads_defaults_without_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = CounterConfig::load().expect("load config");
    assert_eq!(cfg, CounterConfig::default());
}

#[test]
fn loads_json_config_and_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = Builder::new().suffix(".json").tempfile().expect("temp config");
    let json = r#"{
        "output": { "dir": "plates_out", "write_annotated": false, "format": "json" },
        "upload": { "max_bytes": 4096 }
    }"#;
    std::io::Write::write_all(&mut file, json.as_bytes()).expect("write config");

    std::env::set_var("COLONY_CONFIG", file.path());
    std::env::set_var("COLONY_REPORT_FORMAT", "text");
    std::env::set_var("COLONY_MAX_UPLOAD_BYTES", "8192");

    let cfg = CounterConfig::load().expect("load config");
    assert_eq!(cfg.output_dir, PathBuf::from("plates_out"));
    assert!(!cfg.write_annotated);
    assert_eq!(cfg.report_format, ReportFormat::Text);
    assert_eq!(cfg.max_upload_bytes, 8192);

    clear_env();
}

#[test]
fn loads_toml_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = Builder::new().suffix(".toml").tempfile().expect("temp config");
    let toml = "[output]\ndir = \"lab\"\nformat = \"json\"\n";
    std::io::Write::write_all(&mut file, toml.as_bytes()).expect("write config");
    std::env::set_var("COLONY_CONFIG", file.path());
    std::env::set_var("COLONY_WRITE_ANNOTATED", "no");

    let cfg = CounterConfig::load().expect("load config");
    assert_eq!(cfg.output_dir, PathBuf::from("lab"));
    assert_eq!(cfg.report_format, ReportFormat::Json);
    assert!(!cfg.write_annotated);

    clear_env();
}

#[test]
fn rejects_bad_env_values() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("COLONY_MAX_UPLOAD_BYTES", "0");
    assert!(CounterConfig::load().is_err());
    clear_env();

    std::env::set_var("COLONY_MAX_UPLOAD_BYTES", "lots");
    assert!(CounterConfig::load().is_err());
    clear_env();

    std::env::set_var("COLONY_REPORT_FORMAT", "xml");
    assert!(CounterConfig::load().is_err());
    clear_env();

    std::env::set_var("COLONY_WRITE_ANNOTATED", "sometimes");
    assert!(CounterConfig::load().is_err());
    clear_env();
}

#[test]
fn rejects_malformed_config_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = Builder::new().suffix(".json").tempfile().expect("temp config");
    std::io::Write::write_all(&mut file, b"{ not json").expect("write config");
    std::env::set_var("COLONY_CONFIG", file.path());

    let err = CounterConfig::load().unwrap_err();
    assert!(err.to_string().contains("invalid config file"));

    clear_env();
}
