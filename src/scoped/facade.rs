//! Leveled emit operations
//!
//! Each call resolves the role's root logger and policy from the context,
//! drops the entry if the policy omits it, masks what is left and writes at
//! most one entry to the sink.

use super::context::{Context, Role};
use crate::core::{merge_field_maps, LogFields, LogLevel};
use std::panic::Location;

/// Emit `message` at `level` through the role's root logger.
///
/// Field maps are merged with later maps winning on duplicate keys. A
/// context without a root logger for `role` makes this a no-op; that only
/// happens when no host installed one, e.g. in unit tests.
#[track_caller]
pub fn emit(
    ctx: &Context,
    role: Role,
    level: LogLevel,
    message: impl Into<String>,
    fields: &[LogFields],
) {
    let location = Location::caller();

    let Some(logger) = ctx.root_logger(role) else {
        return;
    };
    if !logger.is_enabled(level) {
        return;
    }

    let mut message = message.into();
    let mut transient = merge_field_maps(fields);

    if let Some(policy) = ctx.policy(role) {
        if policy.should_omit(&message, logger.implied_args(), &transient) {
            return;
        }
        policy.apply_mask(&mut message, &mut transient);
    }

    logger.log_at(level, &message, transient, location);
}

#[track_caller]
pub fn trace(ctx: &Context, role: Role, message: impl Into<String>, fields: &[LogFields]) {
    emit(ctx, role, LogLevel::Trace, message, fields);
}

#[track_caller]
pub fn debug(ctx: &Context, role: Role, message: impl Into<String>, fields: &[LogFields]) {
    emit(ctx, role, LogLevel::Debug, message, fields);
}

#[track_caller]
pub fn info(ctx: &Context, role: Role, message: impl Into<String>, fields: &[LogFields]) {
    emit(ctx, role, LogLevel::Info, message, fields);
}

#[track_caller]
pub fn warn(ctx: &Context, role: Role, message: impl Into<String>, fields: &[LogFields]) {
    emit(ctx, role, LogLevel::Warn, message, fields);
}

#[track_caller]
pub fn error(ctx: &Context, role: Role, message: impl Into<String>, fields: &[LogFields]) {
    emit(ctx, role, LogLevel::Error, message, fields);
}
