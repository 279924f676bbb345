//! Host-side sink wiring
//!
//! A host registers one sink in the context before handing it to plugin
//! code; root loggers installed afterwards become named children of it.

use super::context::Context;
use crate::appenders::FileAppender;
use crate::core::{shared, LogLevel, LogOutput, Logger, LoggerError, LoggerOptions, Result};
use std::sync::Arc;

/// Environment variable holding the sink level
pub const ENV_LOG: &str = "PLUGIN_LOG";

/// Environment variable holding a file path for sink output
pub const ENV_LOG_PATH: &str = "PLUGIN_LOG_PATH";

/// Environment variable read by `sdk::root_options_from_env`
pub const ENV_LOG_SDK: &str = "PLUGIN_LOG_SDK";

/// Environment variable read by `provider::root_options_from_env`
pub const ENV_LOG_PROVIDER: &str = "PLUGIN_LOG_PROVIDER";

/// Build a sink from `options` and store it, with a copy of the options,
/// in the returned context.
pub fn register_sink(ctx: &Context, options: LoggerOptions) -> Context {
    let logger = Logger::new(&options);
    ctx.with_sink(Arc::new(logger), Arc::new(options))
}

/// Register a sink configured from [`ENV_LOG`] and [`ENV_LOG_PATH`]
pub fn register_sink_from_env(ctx: &Context) -> Result<Context> {
    register_sink_from_env_vars(ctx, ENV_LOG, ENV_LOG_PATH)
}

/// Register a JSON, independent-levels sink configured from the named
/// variables.
///
/// An unset or unrecognised level turns the sink off. A non-empty path
/// sends output to that file, otherwise it goes to stderr.
pub fn register_sink_from_env_vars(
    ctx: &Context,
    level_var: &str,
    path_var: &str,
) -> Result<Context> {
    let level = std::env::var(level_var)
        .ok()
        .and_then(|raw| raw.parse::<LogLevel>().ok())
        .unwrap_or(LogLevel::Off);

    let output = match std::env::var(path_var) {
        Ok(path) if !path.trim().is_empty() => {
            LogOutput::Appender(shared(FileAppender::new(path.trim())?))
        }
        Ok(_) => return Err(LoggerError::config("sink", format!("{} is empty", path_var))),
        Err(_) => LogOutput::Stderr,
    };

    let options = LoggerOptions {
        name: String::new(),
        level: Some(level),
        output,
        json_format: true,
        include_location: true,
        include_time: true,
        additional_location_offset: 0,
        independent_levels: true,
    };

    Ok(register_sink(ctx, options))
}
