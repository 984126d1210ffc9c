use primer_domain::config::{ArmoryConfig, LogConfig, PrimerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let log = LogConfig::default();
    assert_eq!(log.level, "warn");
    assert!(log.dir.is_none());
    assert!(!log.json);
    assert!(log.console);

    let armory = ArmoryConfig::default();
    assert_eq!(armory.seed, None);
    assert_eq!((armory.min_attacks, armory.max_attacks), (1, 3));
    assert_eq!(armory.default_weapon, "Swordy McSword");
}

#[test]
fn primer_config_deserializes_partially() {
    let raw = json!({
        "log": { "level": "debug", "dir": "/tmp/primer-logs", "console": false },
        "armory": { "seed": 42, "max_attacks": 5 }
    });

    let cfg: PrimerConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.dir, Some(std::path::PathBuf::from("/tmp/primer-logs")));
    assert!(!cfg.log.console);
    assert_eq!(cfg.armory.seed, Some(42));
    assert_eq!(cfg.armory.min_attacks, 1);
    assert_eq!(cfg.armory.max_attacks, 5);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: PrimerConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.log.level, "warn");
    assert_eq!(cfg.armory.default_weapon, "Swordy McSword");
}
