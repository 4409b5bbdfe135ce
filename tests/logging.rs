//! The file logger captures the parser's diagnostics.

use ruleset_rs::{LogInitError, Schema, coerce, init_logger, parse_ruleset};
use std::fs;

#[test]
fn test_logger_records_degraded_input() {
    let path = std::env::temp_dir().join(format!("ruleset-rs-{}.log", std::process::id()));
    let _ = fs::remove_file(&path);

    init_logger(path.to_str().unwrap()).unwrap();
    assert!(matches!(
        init_logger(path.to_str().unwrap()),
        Err(LogInitError::AlreadyInstalled(_))
    ));

    let ruleset = parse_ruleset("width: 10px; broken");
    assert_eq!(ruleset.get("broken"), None);

    let record = Schema::new().field("height", coerce::number).parse("width: 10px");
    assert!(record.get("height").is_some());

    ruleset_rs::log::logger().flush();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[TRACE] ruleset::parser"));
    assert!(contents.contains("broken"));
    assert!(contents.contains("[DEBUG] ruleset::schema"));
    assert!(contents.contains("\"height\""));

    let _ = fs::remove_file(&path);
}
