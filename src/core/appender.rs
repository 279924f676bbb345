//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};
use parking_lot::Mutex;
use std::sync::Arc;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Appender handle shared by a logger and every child derived from it
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Wrap an appender so several loggers can write to it
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(Box::new(appender)))
}
