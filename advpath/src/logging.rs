//! Logging infrastructure for the advpath library.
//!
//! Library code emits records through the `log` facade. [`Logger`] is a small
//! stderr sink for those records whose verbosity is controlled by a
//! [`LogLevel`], so front ends can install it with one call.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "ADVPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use advpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including debug records from path resolution.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use advpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter that corresponds to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr sink for `log` records.
///
/// # Examples
///
/// ```
/// use advpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("mixed separators in input");
/// logger.debug("not printed at Normal");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the global `log` sink.
    ///
    /// Only the first installation in a process takes effect; later calls
    /// return the `log` crate's error and leave the existing sink in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger was already set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level.filter());
        Ok(())
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn allows(&self, level: Level) -> bool {
        level <= self.level.filter()
    }

    fn emit(&self, level: Level, message: &str) {
        if self.allows(level) {
            eprintln!("{level}: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.allows(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Builds a logger from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose beats quiet)
/// 2. `ADVPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use advpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .map_or_else(Logger::default, Logger::new)
}
