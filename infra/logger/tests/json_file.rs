use primer_domain::config::LogConfig;
use primer_logger::Logger;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn log_lines(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .expect("log dir exists")
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("primer-json"))
        .flat_map(|entry| fs::read_to_string(entry.path()).unwrap_or_default().lines().map(str::to_owned).collect::<Vec<_>>())
        .collect()
}

#[test]
fn file_only_config_writes_json_lines() {
    let tmp = tempdir().expect("temp dir");
    let dir = tmp.path().join("nested").join("logs");
    let config = LogConfig {
        level: "debug".to_owned(),
        dir: Some(dir.clone()),
        json: true,
        console: false,
        ..LogConfig::default()
    };

    let logger = Logger::from_config("primer-json", &config).expect("logger installs");
    tracing::info!(lesson = "dictionaries", "Dictionary lesson started");
    tracing::trace!("below the configured level");
    drop(logger);

    let lines = log_lines(&dir);
    let started = lines
        .iter()
        .find(|line| line.contains("Dictionary lesson started"))
        .expect("info line written");
    assert!(started.starts_with('{'), "json object expected, got: {started}");
    assert!(started.contains("\"lesson\":\"dictionaries\""));
    assert!(lines.iter().all(|line| !line.contains("below the configured level")));
}
