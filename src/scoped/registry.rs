//! Root logger registry and policy extension
//!
//! Every operation here reads a context and returns a new one; the input
//! context is never modified.

use super::context::{Context, Role};
use crate::core::{FieldValue, LoggerOptions, Logger, RootOptions};
use crate::policy::PolicyStore;
use regex::Regex;
use std::sync::Arc;

/// Install the root logger for `role`.
///
/// With a host sink in the context, the root logger is a child of the sink
/// named after the role (or `options.name`). It inherits the sink's options;
/// only the name, and the level when one is given, are overridden.
///
/// Without a sink, a standalone JSON logger is built from `options`, with an
/// unset level meaning `Trace`.
pub fn new_root_logger(ctx: &Context, role: Role, options: RootOptions) -> Context {
    let name = options.resolved_name(role.default_logger_name());

    if let Some(sink) = ctx.sink() {
        let logger = sink.named(&name);
        let mut logger_options = ctx
            .sink_options()
            .map(|sink_options| LoggerOptions::clone(sink_options))
            .unwrap_or_default();
        logger_options.name = name;

        if let Some(level) = options.level {
            logger.set_level(level);
            logger_options.level = Some(level);
        }

        return ctx
            .with_root_logger(role, Arc::new(logger))
            .with_root_logger_options(role, Arc::new(logger_options));
    }

    let logger_options = options.resolve(role.default_logger_name());
    let logger = Logger::new(&logger_options);

    ctx.with_root_logger(role, Arc::new(logger))
        .with_root_logger_options(role, Arc::new(logger_options))
}

/// Root options whose level comes from the role's environment variable
/// (`PLUGIN_LOG_SDK` or `PLUGIN_LOG_PROVIDER`) when it names a level.
pub fn root_options_from_env(role: Role) -> RootOptions {
    RootOptions::new().level_from_env(role.level_env_var())
}

/// Bind `key` to every later entry of the role's root logger.
///
/// A context without a root logger for `role` is returned unchanged.
pub fn set_field(
    ctx: &Context,
    role: Role,
    key: impl Into<String>,
    value: impl Into<FieldValue>,
) -> Context {
    match ctx.root_logger(role) {
        Some(logger) => ctx.with_root_logger(role, Arc::new(logger.with(key, value))),
        None => ctx.clone(),
    }
}

fn extend_policy(ctx: &Context, role: Role, extend: impl FnOnce(&mut PolicyStore)) -> Context {
    let mut store = ctx.policy_for_update(role);
    extend(&mut store);
    ctx.with_policy(role, Arc::new(store))
}

/// Drop every entry carrying one of `keys` as a field key
pub fn omit_log_with_field_keys<I, S>(ctx: &Context, role: Role, keys: I) -> Context
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    extend_policy(ctx, role, |store| store.add_omit_log_with_field_keys(keys))
}

/// Drop every entry whose message matches one of `expressions`
pub fn omit_log_with_message_regexes<I>(ctx: &Context, role: Role, expressions: I) -> Context
where
    I: IntoIterator<Item = Regex>,
{
    extend_policy(ctx, role, |store| {
        store.add_omit_log_with_message_regexes(expressions)
    })
}

/// Drop every entry whose message contains one of `matching`
pub fn omit_log_with_message_strings<I, S>(ctx: &Context, role: Role, matching: I) -> Context
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    extend_policy(ctx, role, |store| {
        store.add_omit_log_with_message_strings(matching)
    })
}

/// Replace the value of per-call fields named in `keys` with `***`
pub fn mask_field_values_with_field_keys<I, S>(ctx: &Context, role: Role, keys: I) -> Context
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    extend_policy(ctx, role, |store| {
        store.add_mask_field_values_with_field_keys(keys)
    })
}

/// Replace every message span matching one of `expressions` with `***`
pub fn mask_message_regexes<I>(ctx: &Context, role: Role, expressions: I) -> Context
where
    I: IntoIterator<Item = Regex>,
{
    extend_policy(ctx, role, |store| store.add_mask_message_regexes(expressions))
}

/// Replace every occurrence of one of `matching` in the message with `***`
pub fn mask_message_strings<I, S>(ctx: &Context, role: Role, matching: I) -> Context
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    extend_policy(ctx, role, |store| store.add_mask_message_strings(matching))
}
