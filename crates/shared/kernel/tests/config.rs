use primer_kernel::config::{ConfigError, ConfigLoader, load_config};
use primer_kernel::domain::config::PrimerConfig;
use std::fs;
use tempfile::tempdir;

const NO_ENV: [(&str, &str); 0] = [];

#[test]
fn missing_default_file_yields_defaults() -> Result<(), ConfigError> {
    let cfg: PrimerConfig = ConfigLoader::new().env_source(NO_ENV).load()?;
    assert_eq!(cfg.log.level, "warn");
    assert_eq!(cfg.armory.max_attacks, 3);
    Ok(())
}

#[test]
fn explicit_path_must_exist() {
    let res: Result<PrimerConfig, _> = load_config(Some("does/not/exist.toml"));
    let err = res.expect_err("missing explicit file");
    assert_eq!(err.kind(), "Config");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn toml_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("primer.toml");
    fs::write(
        &path,
        "[log]\nlevel = \"debug\"\n\n[armory]\nseed = 42\ndefault_weapon = \"Staff of Mystacor\"\n",
    )?;

    let cfg: PrimerConfig = ConfigLoader::new().path(&path).env_source(NO_ENV).load()?;
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.armory.seed, Some(42));
    assert_eq!(cfg.armory.default_weapon, "Staff of Mystacor");
    assert_eq!(cfg.armory.min_attacks, 1);
    Ok(())
}

#[test]
fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("primer.toml");
    fs::write(&path, "[armory]\nseed = 42\nmax_attacks = 5\n")?;

    let cfg: PrimerConfig = ConfigLoader::new()
        .path(&path)
        .env_source([("PRIMER__ARMORY__SEED", "7"), ("PRIMER__LOG__LEVEL", "trace")])
        .load()?;

    assert_eq!(cfg.armory.seed, Some(7));
    assert_eq!(cfg.armory.max_attacks, 5);
    assert_eq!(cfg.log.level, "trace");
    Ok(())
}

#[test]
fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("primer.toml");
    fs::write(&path, "[armory]\nmax_attacks = \"lots\"\n")?;

    let res: Result<PrimerConfig, _> = ConfigLoader::new().path(&path).env_source(NO_ENV).load();
    let err = res.expect_err("string is not a u32");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
