//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;

pub use appender::{shared, Appender, SharedAppender};
pub use error::{LoggerError, Result};
pub use fields::{merge_field_maps, FieldArgs, FieldValue, LogFields};
pub use log_entry::{CallSite, LogEntry};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use options::{
    LogOutput, LoggerOptions, RootOptions, DEFAULT_PROVIDER_ROOT_LOGGER_NAME,
    DEFAULT_SDK_ROOT_LOGGER_NAME,
};
pub use output_format::OutputFormat;
