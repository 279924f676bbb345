//! Log entry structure

use super::fields::{FieldArgs, FieldValue};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Call site captured for an entry when location output is enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn from_location(location: &std::panic::Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One emission handed to an appender.
///
/// `fields` holds the logger's permanently-bound fields followed by the
/// per-call fields, in that order. The message is kept verbatim; escaping is
/// left to the output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<CallSite>,
    pub fields: FieldArgs,
}

impl LogEntry {
    pub fn new(level: LogLevel, name: impl Into<String>, message: &str) -> Self {
        Self {
            level,
            name: name.into(),
            message: message.to_string(),
            timestamp: None,
            caller: None,
            fields: Vec::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_caller(mut self, caller: CallSite) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_fields(mut self, fields: FieldArgs) -> Self {
        self.fields = fields;
        self
    }

    /// Last value recorded for `key`; later fields shadow earlier ones
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
