//! Logging for the intl-format message engine
//!
//! Lightweight structured logging controlled by `INTL_FORMAT_*` environment
//! variables. The engine crates log through the macros exported here so that
//! a host application can turn formatting diagnostics on without pulling in a
//! full subscriber stack.
//!
//! # Usage
//!
//! ```rust
//! use intl_format_log::{debug, info, trace};
//!
//! debug!("parsed template");
//! info!("registered {} formatters", 6);
//!
//! let specifier = "date_short";
//! trace!(target: "intl_format::registry", "resolving {}", specifier);
//! ```
//!
//! # Environment Variables
//!
//! - `INTL_FORMAT_DEBUG=1` - Enable debug logging
//! - `INTL_FORMAT_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `INTL_FORMAT_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `INTL_FORMAT_LOG_COLOR=1|0` - Enable/disable colors
//! - `INTL_FORMAT_LOG_TIMESTAMPS=1|0` - Prefix lines with a timestamp
//! - `INTL_FORMAT_LOG_MODULE=1|0` - Include the log target

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Prefix shared by every environment variable read by this crate.
pub const ENV_PREFIX: &str = "INTL_FORMAT";

// ============================================================================
// Log Levels
// ============================================================================

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Formatter selection and per-token detail
    Trace = 0,
    /// Parse and resolution summaries
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// No logging at all
    Off = 5,
}

impl Level {
    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    /// Colored level name (if color feature enabled).
    #[cfg(feature = "color")]
    pub fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(()),
        }
    }
}

impl From<::log::Level> for Level {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Trace => Level::Trace,
            ::log::Level::Debug => Level::Debug,
            ::log::Level::Info => Level::Info,
            ::log::Level::Warn => Level::Warn,
            ::log::Level::Error => Level::Error,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human readable, optionally colored
    Pretty,
    /// One short line per record
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

// Library default is quiet: formatting is hot-path code.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include timestamps
    pub timestamps: bool,
    /// Whether to include the log target
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Warn,
            format: Format::Compact,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Read the configuration from `INTL_FORMAT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Keys are the full variable names, e.g. `INTL_FORMAT_LOG_LEVEL`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}_{}", ENV_PREFIX, suffix));
        let flag = |suffix: &str| var(suffix).map(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        let debug = flag("DEBUG").unwrap_or(false);

        let level = var("LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Warn });

        let format = var("LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Compact);

        let color = flag("LOG_COLOR").unwrap_or_else(|| {
            lookup("NO_COLOR").is_none() && lookup("TERM").is_some() && format == Format::Pretty
        });

        Self {
            debug,
            level,
            format,
            color,
            timestamps: flag("LOG_TIMESTAMPS").unwrap_or(true),
            module_path: flag("LOG_MODULE").unwrap_or(true),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Initialize the logging system eagerly.
///
/// Otherwise the environment is read on the first level check.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Check if debug logging is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Check if a log level is enabled.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Current minimum level.
pub fn current_level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set log level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Enable or disable debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// The process-wide configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Output
// ============================================================================

/// Write one record. Used by the macros.
#[doc(hidden)]
pub fn emit(level: Level, target: &str, message: &str) {
    if !is_level_enabled(level) {
        return;
    }

    let line = render_line(level, target, message, config());
    let _ = writeln!(std::io::stderr().lock(), "{}", line);
}

fn render_line(level: Level, target: &str, message: &str, config: &LogConfig) -> String {
    match config.format {
        Format::Pretty => render_pretty(level, target, message, config),
        Format::Compact => render_compact(level, target, message, config),
        Format::Json => render_json(level, target, message),
    }
}

fn render_pretty(level: Level, target: &str, message: &str, config: &LogConfig) -> String {
    let mut line = String::new();

    if config.timestamps {
        line.push_str(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
    }

    #[cfg(feature = "color")]
    let level_name = if config.color {
        level.colored().to_string()
    } else {
        level.as_str().to_string()
    };
    #[cfg(not(feature = "color"))]
    let level_name = level.as_str().to_string();

    line.push_str(&format!("{:5} ", level_name));

    if config.module_path && !target.is_empty() {
        line.push_str(&format!("[{}] ", target));
    }

    line.push_str(message);
    line
}

fn render_compact(level: Level, target: &str, message: &str, config: &LogConfig) -> String {
    let mut line = String::new();

    if config.timestamps {
        line.push_str(&chrono::Local::now().format("%H:%M:%S ").to_string());
    }

    line.push(level.as_str().chars().next().unwrap_or('?'));
    line.push(' ');

    if config.module_path && !target.is_empty() {
        line.push_str(target);
        line.push_str(": ");
    }

    line.push_str(message);
    line
}

#[cfg(feature = "json")]
fn render_json(level: Level, target: &str, message: &str) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct LogEntry<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let entry = LogEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    serde_json::to_string(&entry).unwrap_or_default()
}

#[cfg(not(feature = "json"))]
fn render_json(level: Level, target: &str, message: &str) -> String {
    format!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        escape_json(target),
        escape_json(message)
    )
}

#[cfg(not(feature = "json"))]
fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result
}

// ============================================================================
// `log` crate bridge
// ============================================================================

struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &::log::Metadata<'_>) -> bool {
        is_level_enabled(metadata.level().into())
    }

    fn log(&self, record: &::log::Record<'_>) {
        if self.enabled(record.metadata()) {
            emit(record.level().into(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Route records from the `log` facade through this crate's output.
///
/// Fails if another logger was installed first.
pub fn init_log_bridge() -> Result<(), ::log::SetLoggerError> {
    init();
    ::log::set_logger(&BRIDGE)?;
    ::log::set_max_level(match current_level() {
        Level::Trace => ::log::LevelFilter::Trace,
        Level::Debug => ::log::LevelFilter::Debug,
        Level::Info => ::log::LevelFilter::Info,
        Level::Warn => ::log::LevelFilter::Warn,
        Level::Error => ::log::LevelFilter::Error,
        Level::Off => ::log::LevelFilter::Off,
    });
    Ok(())
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::emit($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::emit($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Enabled by `INTL_FORMAT_DEBUG=1` or `INTL_FORMAT_LOG_LEVEL=debug`.
///
/// ```rust
/// use intl_format_log::debug;
///
/// let template = "Hello %world";
/// debug!(target: "intl_format::engine", "formatting {:?}", template);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::emit($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::emit($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::emit($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::emit($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::emit($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::emit($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::emit($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::emit($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tracing Integration
// ============================================================================

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! Tracing subscriber honoring the `INTL_FORMAT_*` configuration.

    use super::*;

    /// Create a tracing subscriber at the configured level.
    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let level = match config.level {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color))
    }
}
