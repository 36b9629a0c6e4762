mod common;

use common::Capture;
use logger::{Config, Logger};

fn emitted_levels(level: &str) -> Vec<String> {
    let capture = Capture::default();
    let logger = Logger::new(&Config::new(level, "filtering", true), capture.sink());

    logger.in_scope(common::emit_every_level);

    capture
        .records()
        .iter()
        .map(|record| record["level"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn debug_admits_debug_and_above() {
    assert_eq!(emitted_levels("debug"), ["DEBUG", "INFO", "WARN", "ERROR"]);
}

#[test]
fn info_admits_info_and_above() {
    assert_eq!(emitted_levels("info"), ["INFO", "WARN", "ERROR"]);
}

#[test]
fn warn_admits_warn_and_above() {
    assert_eq!(emitted_levels("warn"), ["WARN", "ERROR"]);
}

#[test]
fn error_admits_only_error() {
    assert_eq!(emitted_levels("error"), ["ERROR"]);
}

#[test]
fn unrecognized_levels_behave_as_info() {
    let info = emitted_levels("info");
    for name in ["", "trace", "verbose", "WARN"] {
        assert_eq!(emitted_levels(name), info, "level {name:?}");
    }
}

#[test]
fn handles_filter_independently() {
    let verbose = Capture::default();
    let quiet = Capture::default();
    let verbose_logger = Logger::new(&Config::new("debug", "a", true), verbose.sink());
    let quiet_logger = Logger::new(&Config::new("error", "b", true), quiet.sink());

    verbose_logger.in_scope(|| tracing::debug!("detail"));
    quiet_logger.in_scope(|| tracing::debug!("detail"));

    assert_eq!(verbose.lines().len(), 1);
    assert!(quiet.lines().is_empty());
}
