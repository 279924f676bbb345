//! Output format configuration for log entries
//!
//! Provides the two line formats a sink writes:
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line with `@`-prefixed metadata keys

use super::fields::format_field_args;
use super::log_entry::LogEntry;

/// Timestamp layout shared by both formats (millisecond precision, offset)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Escape line breaks and tabs so one entry stays on one text line and
/// cannot forge further entries.
fn escape_control(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08T10:30:45.123+00:00 [INFO]  sdk: lib.rs:10: Request processed: id=1`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"@level":"info","@message":"Request processed","@module":"sdk","id":1}`
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json_format: bool) -> Self {
        if json_format {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry) -> String {
        match self {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json => self.format_json(entry),
        }
    }

    /// Format as human-readable text
    fn format_text(&self, entry: &LogEntry) -> String {
        let mut line = String::new();

        if let Some(ts) = entry.timestamp {
            line.push_str(&ts.format(TIMESTAMP_FORMAT).to_string());
            line.push(' ');
        }

        line.push_str(&format!("{:7}", format!("[{}]", entry.level.to_str())));

        if !entry.name.is_empty() {
            line.push(' ');
            line.push_str(&entry.name);
            line.push(':');
        }

        if let Some(ref caller) = entry.caller {
            line.push(' ');
            line.push_str(&caller.to_string());
            line.push(':');
        }

        line.push(' ');
        line.push_str(&escape_control(&entry.message));

        if !entry.fields.is_empty() {
            line.push_str(": ");
            line.push_str(&format_field_args(&entry.fields));
        }

        line
    }

    /// Format as JSON
    fn format_json(&self, entry: &LogEntry) -> String {
        let mut json_obj = serde_json::Map::new();

        if let Some(ts) = entry.timestamp {
            json_obj.insert(
                "@timestamp".to_string(),
                serde_json::Value::String(ts.format(TIMESTAMP_FORMAT).to_string()),
            );
        }

        json_obj.insert(
            "@level".to_string(),
            serde_json::Value::String(entry.level.as_json_str().to_string()),
        );

        json_obj.insert(
            "@message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        if !entry.name.is_empty() {
            json_obj.insert(
                "@module".to_string(),
                serde_json::Value::String(entry.name.clone()),
            );
        }

        if let Some(ref caller) = entry.caller {
            json_obj.insert(
                "@caller".to_string(),
                serde_json::Value::String(caller.to_string()),
            );
        }

        // Later duplicates overwrite earlier ones, so per-call fields win
        for (key, value) in &entry.fields {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}
