use primer_domain::config::LogConfig;
use primer_logger::{Logger, LoggerError};
use std::fs;
use tempfile::tempdir;

#[test]
fn plain_file_lines_and_a_single_install_per_process() {
    let tmp = tempdir().expect("temp dir");
    let config = LogConfig {
        level: "info".to_owned(),
        filter: Some("info,plain_file=warn".to_owned()),
        dir: Some(tmp.path().to_path_buf()),
        console: false,
        ..LogConfig::default()
    };

    let logger = Logger::from_config("primer-plain", &config).expect("first install");
    tracing::warn!(target: "plain_file", "Krytis is not on the map");
    tracing::info!(target: "plain_file", "filtered out by the directive");

    let again = Logger::from_config("primer-plain", &LogConfig::default());
    assert!(matches!(again, Err(LoggerError::Subscriber { .. })));
    drop(logger);

    let contents: String = fs::read_dir(tmp.path())
        .expect("log dir exists")
        .flatten()
        .map(|entry| fs::read_to_string(entry.path()).unwrap_or_default())
        .collect();
    let line = contents.lines().find(|l| l.contains("Krytis")).expect("warn line written");
    assert!(!line.starts_with('{'));
    assert!(line.contains("WARN"));
    assert!(!contents.contains("filtered out by the directive"));
}
