//! File logging. Kept in its own test binary because it installs the global
//! subscriber.

use std::fs;

use rxmatch_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging, redact_value};
use tracing::level_filters::LevelFilter;

#[test]
fn json_events_are_appended_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rxmatch.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };
    init_logging(&config).unwrap();

    tracing::info!(target: "rxmatch_cli", drug = redact_value("warfarin"), "resolved drug");
    tracing::debug!(target: "rxmatch_cli", "below the level filter");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("resolved drug"));
    assert!(contents.contains(REDACTED_VALUE));
    assert!(!contents.contains("warfarin"));
    assert!(!contents.contains("below the level filter"));
    assert!(!contents.contains('\u{1b}'));
}
