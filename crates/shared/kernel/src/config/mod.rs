use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `PRIMER__ARMORY__SEED=7`.
pub const ENV_PREFIX: &str = "PRIMER";
const ENV_SEPARATOR: &str = "__";
/// File stem probed in the working directory when no path is given.
const DEFAULT_STEM: &str = "primer";

/// Custom error type for config loading.
#[primer_derive::primer_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A layered configuration loader: one file source, then environment overrides.
///
/// 1. **File**: an explicit path is required to exist; without one, an optional
///    `primer.{toml,json,yaml}` in the working directory is used when present.
/// 2. **Environment**: variables prefixed with `PRIMER__`, nested with `__`
///    (`PRIMER__LOG__LEVEL` maps to `log.level`). Tests can swap the process
///    environment for an explicit map with [`ConfigLoader::env_source`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as a required file source.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_source<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if a required file is missing, a source is
    /// malformed, or the merged values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let (file, required) =
            self.path.map_or_else(|| (PathBuf::from(DEFAULT_STEM), false), |p| (p, true));

        let builder = Config::builder()
            .add_source(File::from(file.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(self.env),
            );

        if required {
            info!("Loading config from {}", file.display());
        } else {
            debug!("Probing optional config {}", file.display());
        }

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}

/// Loads `T` from `path` (or the optional default file) plus `PRIMER__*` overrides.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust
/// use primer_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct LessonConfig {
///     seed: Option<u64>,
/// }
///
/// let cfg: LessonConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// assert!(cfg.seed.is_none());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.path(path),
        None => loader,
    }
    .load()
}
