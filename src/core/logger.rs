//! Sink logger implementation
//!
//! A `Logger` is a named, leveled handle onto a shared appender. Children
//! derived with [`Logger::named`] or [`Logger::with`] write to the same
//! appender, so a host can hand one sink to many plugin components.

use super::{
    appender::{shared, Appender, SharedAppender},
    error::Result,
    fields::{FieldArgs, FieldValue},
    log_entry::{CallSite, LogEntry},
    log_level::LogLevel,
    options::{LogOutput, LoggerOptions},
    output_format::OutputFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::panic::Location;
use std::sync::Arc;

/// Settings every logger derived from the same root shares
struct SinkSettings {
    appender: SharedAppender,
    include_location: bool,
    include_time: bool,
}

#[derive(Clone)]
pub struct Logger {
    name: String,
    min_level: Arc<RwLock<LogLevel>>,
    independent_levels: bool,
    implied_args: FieldArgs,
    settings: Arc<SinkSettings>,
}

impl Logger {
    /// Build a logger from options. An unset level means `Info`.
    ///
    /// Call sites are resolved with `#[track_caller]`, so
    /// `additional_location_offset` is only recorded in the options.
    #[must_use]
    pub fn new(options: &LoggerOptions) -> Self {
        let format = OutputFormat::from_json_flag(options.json_format);
        let appender = match &options.output {
            LogOutput::Stderr => shared(ConsoleAppender::stderr().with_output_format(format)),
            LogOutput::Stdout => shared(ConsoleAppender::stdout().with_output_format(format)),
            LogOutput::Appender(appender) => Arc::clone(appender),
        };

        Self {
            name: options.name.clone(),
            min_level: Arc::new(RwLock::new(options.effective_level())),
            independent_levels: options.independent_levels,
            implied_args: Vec::new(),
            settings: Arc::new(SinkSettings {
                appender,
                include_location: options.include_location,
                include_time: options.include_time,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Change the minimum level.
    ///
    /// Loggers sharing a level cell with this one (see [`Logger::named`])
    /// observe the change too.
    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Derive a child named `<parent>.<name>`, or `<name>` when the parent is
    /// unnamed.
    ///
    /// With independent levels the child starts at the parent's current level
    /// and is adjusted separately afterwards; otherwise both share one level.
    #[must_use]
    pub fn named(&self, name: &str) -> Logger {
        let full_name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };

        let min_level = if self.independent_levels {
            Arc::new(RwLock::new(self.level()))
        } else {
            Arc::clone(&self.min_level)
        };

        Logger {
            name: full_name,
            min_level,
            independent_levels: self.independent_levels,
            implied_args: self.implied_args.clone(),
            settings: Arc::clone(&self.settings),
        }
    }

    /// Derive a logger that attaches `key` to every entry it writes.
    ///
    /// Binding an existing key again replaces the earlier value.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Logger {
        let key = key.into();
        let value = value.into();
        let mut implied_args = self.implied_args.clone();
        match implied_args.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => implied_args.push((key, value)),
        }

        Logger {
            implied_args,
            ..self.clone()
        }
    }

    /// Fields permanently bound with [`Logger::with`]
    pub fn implied_args(&self) -> &[(String, FieldValue)] {
        &self.implied_args
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_for(self.level())
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str, args: FieldArgs) {
        self.log_at(level, message, args, Location::caller());
    }

    /// Write one entry attributed to `location`
    pub fn log_at(&self, level: LogLevel, message: &str, args: FieldArgs, location: &Location<'_>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut fields = self.implied_args.clone();
        fields.extend(args);

        let mut entry = LogEntry::new(level, self.name.clone(), message).with_fields(fields);
        if self.settings.include_time {
            entry = entry.with_timestamp(chrono::Utc::now());
        }
        if self.settings.include_location {
            entry = entry.with_caller(CallSite::from_location(location));
        }

        let mut appender = self.settings.appender.lock();
        Self::process_sync(&mut **appender, &entry);
    }

    /// Hand an entry to the appender with panic isolation.
    ///
    /// Failures never reach the caller; they are reported on stderr.
    fn process_sync(appender: &mut dyn Appender, entry: &LogEntry) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(entry)?;
            appender.flush()
        }));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_msg
                );
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.settings.appender.lock().flush()
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: &str, args: FieldArgs) {
        self.log(LogLevel::Trace, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: &str, args: FieldArgs) {
        self.log(LogLevel::Debug, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: &str, args: FieldArgs) {
        self.log(LogLevel::Info, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: &str, args: FieldArgs) {
        self.log(LogLevel::Warn, message, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: &str, args: FieldArgs) {
        self.log(LogLevel::Error, message, args);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("independent_levels", &self.independent_levels)
            .field("implied_args", &self.implied_args)
            .finish()
    }
}
