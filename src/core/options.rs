//! Logger construction options
//!
//! `LoggerOptions` is what a sink logger is built from and what the registry
//! records next to every root logger. `RootOptions` is what callers pass when
//! installing a root logger; unset entries are filled by [`RootOptions::resolve`].

use super::appender::SharedAppender;
use super::log_level::LogLevel;
use std::fmt;

/// Where a logger writes its entries
#[derive(Clone, Default)]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
    /// A caller-supplied appender, shared by every logger derived from this one
    Appender(SharedAppender),
}

impl fmt::Debug for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOutput::Stderr => write!(f, "Stderr"),
            LogOutput::Stdout => write!(f, "Stdout"),
            LogOutput::Appender(appender) => write!(f, "Appender({})", appender.lock().name()),
        }
    }
}

/// Options a sink logger is constructed from.
///
/// `Clone` is a deep value copy of every setting. The output handle is the
/// one exception: the copy writes to the same destination.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub name: String,
    /// `None` means unset
    pub level: Option<LogLevel>,
    pub output: LogOutput,
    pub json_format: bool,
    pub include_location: bool,
    pub include_time: bool,
    pub additional_location_offset: usize,
    pub independent_levels: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: None,
            output: LogOutput::Stderr,
            json_format: false,
            include_location: false,
            include_time: true,
            additional_location_offset: 0,
            independent_levels: false,
        }
    }
}

impl LoggerOptions {
    /// Effective minimum level; unset falls back to `Info`
    pub fn effective_level(&self) -> LogLevel {
        self.level.unwrap_or_default()
    }
}

/// Default name of the SDK root logger
pub const DEFAULT_SDK_ROOT_LOGGER_NAME: &str = "sdk";

/// Default name of the provider root logger
pub const DEFAULT_PROVIDER_ROOT_LOGGER_NAME: &str = "provider";

/// Caller options for installing a root logger
///
/// | option | default |
/// |---|---|
/// | `name` | role default (`sdk` / `provider`) |
/// | `level` | unset (most verbose without a host sink, sink level with one) |
/// | `include_location` | `true` |
/// | `include_time` | `true` |
/// | `output` | stderr |
/// | `additional_location_offset` | `1` |
///
/// # Example
/// ```
/// use plugin_log::{LogLevel, RootOptions};
///
/// let options = RootOptions::new()
///     .name("my-provider")
///     .level(LogLevel::Debug)
///     .without_location();
/// assert_eq!(options.level, Some(LogLevel::Debug));
/// ```
#[derive(Debug, Clone)]
pub struct RootOptions {
    pub name: Option<String>,
    pub level: Option<LogLevel>,
    pub include_location: bool,
    pub include_time: bool,
    pub output: LogOutput,
    pub additional_location_offset: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            name: None,
            level: None,
            include_location: true,
            include_time: true,
            output: LogOutput::Stderr,
            additional_location_offset: 1,
        }
    }
}

impl RootOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Take the level from environment variable `var` when it names a level.
    ///
    /// Unset, empty or unrecognised values leave the current level untouched.
    #[must_use = "builder methods return a new value"]
    pub fn level_from_env(mut self, var: &str) -> Self {
        if let Some(level) = std::env::var(var)
            .ok()
            .and_then(|raw| raw.parse::<LogLevel>().ok())
        {
            self.level = Some(level);
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn without_location(mut self) -> Self {
        self.include_location = false;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn additional_location_offset(mut self, offset: usize) -> Self {
        self.additional_location_offset = offset;
        self
    }

    /// Name to use, falling back to `default_name` when unset or empty
    pub fn resolved_name(&self, default_name: &str) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_name.to_string(),
        }
    }

    /// Standalone logger options for when no host sink is present.
    ///
    /// Output is JSON with independent levels; an unset level becomes `Trace`.
    pub fn resolve(&self, default_name: &str) -> LoggerOptions {
        LoggerOptions {
            name: self.resolved_name(default_name),
            level: Some(self.level.unwrap_or(LogLevel::Trace)),
            output: self.output.clone(),
            json_format: true,
            include_location: self.include_location,
            include_time: self.include_time,
            additional_location_offset: self.additional_location_offset,
            independent_levels: true,
        }
    }
}
