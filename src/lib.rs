//! # Plugin Log
//!
//! Scoped, structured logging for plugin components that write into a log
//! sink owned by their host.
//!
//! ## Features
//!
//! - **Context-scoped loggers**: SDK and provider root loggers travel in an
//!   immutable [`Context`], derived from a host sink when one is registered
//! - **Omission rules**: drop entries by field key, message pattern or substring
//! - **Masking rules**: redact field values and message spans with `***`
//! - **Structured output**: JSON or text lines through pluggable appenders

#[macro_use]
pub mod macros;

pub mod appenders;
pub mod core;
pub mod policy;
pub mod provider;
pub mod scoped;
pub mod sdk;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        shared, Appender, FieldValue, LogEntry, LogFields, LogLevel, LogOutput, Logger,
        LoggerError, LoggerOptions, OutputFormat, Result, RootOptions,
    };
    pub use crate::policy::{PolicyStore, MASK_TOKEN};
    pub use crate::scoped::{Context, Role};
    pub use crate::{provider, sdk};
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    shared, Appender, CallSite, FieldArgs, FieldValue, LogEntry, LogFields, LogLevel, LogOutput,
    Logger, LoggerError, LoggerOptions, OutputFormat, Result, RootOptions, SharedAppender,
};
pub use policy::{PolicyStore, MASK_TOKEN};
pub use scoped::{register_sink, register_sink_from_env, Context, Role};
