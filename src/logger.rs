//! A small stderr logger for the `log` facade.
//!
//! The library itself only emits through `log` macros. Binaries and demos that
//! want to see those records can install [`CookbookLogger`], which prints one
//! line per record with a coloured level tag.
//!
//! The level is read from the `COOKBOOK_LOG` environment variable
//! (`off`, `error`, `warn`, `info`, `debug` or `trace`) and defaults to `info`.
//!
//! ```rust,no_run
//! cookbook::logger::init_logging();
//! log::info!("ready");
//! ```

use crate::style;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::OnceLock;

/// Environment variable that selects the log level.
pub const LOG_ENV: &str = "COOKBOOK_LOG";

/// Returns the level configured through [`LOG_ENV`], read once per process.
pub fn env_level() -> LevelFilter {
    static LEVEL: OnceLock<LevelFilter> = OnceLock::new();
    *LEVEL.get_or_init(|| level_from(std::env::var(LOG_ENV).ok().as_deref()))
}

/// Maps a [`LOG_ENV`] value to a level. Unset or unrecognised values mean `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value.and_then(parse_level).unwrap_or(LevelFilter::Info)
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Writes log records to stderr, one line each.
pub struct CookbookLogger {
    level: LevelFilter,
    target_filter: Option<String>,
}

impl CookbookLogger {
    /// Creates a logger that shows records up to `level`.
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            target_filter: None,
        }
    }

    /// Creates a logger that only shows records whose target starts with `target`.
    pub fn with_target(level: LevelFilter, target: impl Into<String>) -> Self {
        Self {
            level,
            target_filter: Some(target.into()),
        }
    }

    /// Installs this logger as the global logger.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format_message(&self, record: &Record) -> String {
        let level_str = match record.level() {
            Level::Error => style::ered("ERROR").to_string(),
            Level::Warn => style::eyellow("WARN").to_string(),
            Level::Info => style::ecyan("INFO").to_string(),
            Level::Debug => style::edim("DEBUG").to_string(),
            Level::Trace => style::edim("TRACE").to_string(),
        };
        format!("{} {}", level_str, record.args())
    }
}

impl Log for CookbookLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        match &self.target_filter {
            Some(filter) => metadata.target().starts_with(filter),
            None => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = self.format_message(record);
        let _ = writeln!(std::io::stderr().lock(), "{message}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs [`CookbookLogger`] at the level from [`LOG_ENV`].
///
/// Does nothing if another logger is already installed.
pub fn init_logging() {
    let _ = try_init_logging();
}

/// Like [`init_logging`], but reports whether a logger was already set.
///
/// # Errors
///
/// Returns an error if a logger has already been set.
pub fn try_init_logging() -> Result<(), SetLoggerError> {
    CookbookLogger::new(env_level()).init()
}

/// Installs [`CookbookLogger`] with an explicit level, ignoring [`LOG_ENV`].
///
/// # Errors
///
/// Returns an error if a logger has already been set.
pub fn try_init_logging_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    CookbookLogger::new(level).init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_level_from_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from(Some("")), LevelFilter::Info);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = CookbookLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).target("app").build();
        let debug = Metadata::builder().level(Level::Debug).target("app").build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_enabled_respects_target() {
        let logger = CookbookLogger::with_target(LevelFilter::Trace, "cookbook");
        let ours = Metadata::builder()
            .level(Level::Info)
            .target("cookbook::singleton")
            .build();
        let theirs = Metadata::builder().level(Level::Info).target("other").build();
        assert!(logger.enabled(&ours));
        assert!(!logger.enabled(&theirs));
    }

    #[test]
    fn test_format_message() {
        let logger = CookbookLogger::new(LevelFilter::Info);
        let message = logger.format_message(
            &Record::builder()
                .args(format_args!("Greeter: instance created"))
                .level(Level::Warn)
                .build(),
        );
        assert!(message.contains("WARN"));
        assert!(message.ends_with("Greeter: instance created"));
    }
}
