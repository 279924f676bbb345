//! Console appender implementation

use crate::core::{Appender, LogEntry, OutputFormat, Result};
#[cfg(feature = "console")]
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    stream: Stream,
    use_colors: bool,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    /// Console appender writing to stderr, the default sink destination
    pub fn new() -> Self {
        Self::stderr()
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
            use_colors: false,
            output_format: OutputFormat::default(),
        }
    }

    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
            use_colors: false,
            output_format: OutputFormat::default(),
        }
    }

    /// Colour the level tag in text output (needs the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use plugin_log::appenders::ConsoleAppender;
    /// use plugin_log::OutputFormat;
    ///
    /// let appender = ConsoleAppender::stderr()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        let line = self.output_format.format(entry);

        #[cfg(feature = "console")]
        if self.use_colors && self.output_format == OutputFormat::Text {
            let tag = format!("[{}]", entry.level.to_str());
            let coloured = tag.color(entry.level.color_code()).to_string();
            return line.replacen(&tag, &coloured, 1);
        }

        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);
        match self.stream {
            Stream::Stderr => eprintln!("{}", output),
            Stream::Stdout => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        match self.stream {
            Stream::Stderr => std::io::stderr().flush()?,
            Stream::Stdout => std::io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
