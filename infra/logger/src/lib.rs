//! # Logger
//!
//! Installs the global `tracing` subscriber for the `primer` binary.
//!
//! * Console lines go to **stderr**, so stdout carries nothing but lesson text.
//! * Rolling daily files are optional, plain or JSON lines, written off-thread.
//! * `RUST_LOG` refines the configured level unless an explicit filter is given.
//!
//! [`Logger::from_config`] is the usual entry point; the builder is there for
//! callers that do not go through [`LogConfig`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use primer_domain::config::LogConfig;
//! use primer_logger::Logger;
//!
//! let config = LogConfig { level: "debug".to_owned(), ..LogConfig::default() };
//! let _logger = Logger::from_config("primer", &config)?;
//! tracing::debug!("visible on stderr");
//! # Ok::<(), primer_logger::LoggerError>(())
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use primer_domain::config::LogConfig;
use private::Sealed;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_FILE_SUFFIX: &str = "log";
const KEPT_LOG_FILES: usize = 7;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

mod private {
    pub trait Sealed {}
}

/// Builder state: console only.
#[derive(Debug)]
pub struct NoFile;

/// Builder state: rolling files in `dir` as well.
#[derive(Debug)]
pub struct WithFile {
    dir: PathBuf,
    json: bool,
}

impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures and installs the global subscriber. See [`Logger::builder`].
#[derive(Debug)]
#[must_use = "Nothing is logged until `init` is called."]
pub struct LoggerBuilder<F: Sealed = NoFile> {
    name: String,
    level: LevelFilter,
    filter: Option<String>,
    console: bool,
    file: F,
}

impl<F: Sealed> LoggerBuilder<F> {
    /// Default level for every target not named by a filter directive.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit directives such as `primer_store=trace`. Replaces `RUST_LOG`.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    /// Toggles the stderr layer.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    fn install(self, file_layer: Option<(BoxedLayer, WorkerGuard)>) -> Result<Logger, LoggerError> {
        let filter = self.filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
        if self.console {
            layers.push(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .boxed(),
            );
        }
        let guard = file_layer.map(|(layer, guard)| {
            layers.push(layer);
            guard
        });

        if layers.is_empty() {
            return Err(invalid("console and file output are both disabled"));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %self.name, file = guard.is_some(), "Logger installed");

        Ok(Logger { _guard: guard })
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.filter {
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| invalid(format!("bad filter '{directives}': {e}"))),
            None => Ok(builder.from_env_lossy()),
        }
    }

    fn check_name(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("logger name is blank"));
        }
        Ok(())
    }
}

impl LoggerBuilder<NoFile> {
    /// Also writes daily-rotated `<name>.<date>.log` files into `dir`.
    pub fn file(self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        LoggerBuilder {
            name: self.name,
            level: self.level,
            filter: self.filter,
            console: self.console,
            file: WithFile { dir: dir.into(), json: false },
        }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for a blank name, a bad filter or no
    /// enabled output; [`LoggerError::Subscriber`] if a subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.check_name()?;
        self.install(None)
    }
}

impl LoggerBuilder<WithFile> {
    /// Writes file lines as JSON objects.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.file.json = enabled;
        self
    }

    /// Creates the log directory and installs the subscriber.
    ///
    /// # Errors
    /// As the console-only `init`, plus [`LoggerError::Io`] if the
    /// directory cannot be created and [`LoggerError::Appender`] if the
    /// appender cannot start.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.check_name()?;
        let dir = &self.file.dir;
        fs::create_dir_all(dir).context(format!("Creating {}", dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&self.name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(KEPT_LOG_FILES)
            .build(dir)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        let layer = if self.file.json { layer.json().boxed() } else { layer.boxed() };

        self.install(Some((layer, guard)))
    }
}

/// The installed logging system.
///
/// Holds the file writer's worker; dropping the handle flushes pending file lines.
#[must_use = "Dropping the handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console-only builder at `INFO`. `name` prefixes rolling file names.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            filter: None,
            console: true,
            file: NoFile,
        }
    }

    /// Installs the subscriber described by the `[log]` configuration table.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level, plus
    /// everything the builder's `init` can return.
    pub fn from_config(name: &str, config: &LogConfig) -> Result<Self, LoggerError> {
        let mut builder = Self::builder(name).level(parse_level(&config.level)?).console(config.console);
        if let Some(directives) = &config.filter {
            builder = builder.env_filter(directives.as_str());
        }

        match &config.dir {
            Some(dir) => builder.file(dir).json(config.json).init(),
            None => builder.init(),
        }
    }
}

/// Parses a level name (`"warn"`, `"DEBUG"`, `"off"`, ...) into a [`LevelFilter`].
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| invalid(format!("unknown level '{level}': {e}")))
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_starts_console_only_at_info() {
        let builder = Logger::builder("primer");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.filter.is_none());
    }

    #[test]
    fn file_state_carries_json_flag() {
        let builder = Logger::builder("primer").console(false).file("logs").json(true);
        assert!(!builder.console);
        assert!(builder.file.json);
        assert_eq!(builder.file.dir, PathBuf::from("logs"));
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("warn").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" DEBUG ").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("off").ok(), Some(LevelFilter::OFF));
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    #[serial]
    fn bad_settings_fail_before_anything_is_installed() {
        let err = Logger::builder("  ").init().expect_err("blank name");
        assert_eq!(err.kind(), "InvalidConfiguration");

        let err = Logger::builder("primer").console(false).init().expect_err("no output");
        assert!(err.to_string().contains("both disabled"));

        let err = Logger::builder("primer").env_filter("primer=loud").init().expect_err("filter");
        assert!(err.to_string().contains("bad filter"));

        let config = LogConfig { level: "chatty".to_owned(), ..LogConfig::default() };
        let err = Logger::from_config("primer", &config).expect_err("level");
        assert!(err.to_string().contains("unknown level 'chatty'"));
    }
}
