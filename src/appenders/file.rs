//! File appender implementation

use crate::core::{Appender, LogEntry, LoggerError, OutputFormat, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one formatted line per entry to a file (JSON lines by default)
pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
    output_format: OutputFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            output_format: OutputFormat::Json,
        })
    }

    /// Set the output format for this appender
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.output_format.format(entry);
        output.push('\n');

        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, LogLevel};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_appender_json_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("plugin.jsonl");

        let mut appender = FileAppender::new(&log_path)?;
        for i in 0..3 {
            let entry = LogEntry::new(LogLevel::Debug, "sdk", &format!("Iteration {}", i))
                .with_fields(vec![("iteration".to_string(), FieldValue::Int(i))]);
            appender.append(&entry)?;
        }
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["@message"].is_string());
            assert_eq!(parsed["@level"], "debug");
        }

        Ok(())
    }

    #[test]
    fn test_drop_flushes_and_reopen_appends() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("plugin.log");

        for run in 0..2 {
            let mut appender =
                FileAppender::new(&log_path)?.with_output_format(OutputFormat::Text);
            appender.append(&LogEntry::new(LogLevel::Info, "sdk", &format!("run {}", run)))?;
        }

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["[INFO]  sdk: run 0", "[INFO]  sdk: run 1"]);
        Ok(())
    }

    #[test]
    fn test_file_appender_missing_directory() {
        let dir = tempdir().expect("temp dir");
        let result = FileAppender::new(dir.path().join("missing").join("plugin.log"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
