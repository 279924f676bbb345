//! Logging macros for ergonomic log message formatting.
//!
//! These macros format the message like `format!` and emit it through the
//! root logger of a role, running the context's omission and masking rules.
//! Field maps built with `fields!` can follow the arguments after a `;`.
//!
//! # Examples
//!
//! ```
//! use plugin_log::{info, fields, sdk, Context, Role, RootOptions};
//!
//! let ctx = sdk::new_root_logger(&Context::new(), RootOptions::default());
//!
//! // Basic logging
//! info!(&ctx, Role::Sdk, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(&ctx, Role::Sdk, "Server listening on port {}", port);
//!
//! // Field maps are built with `fields!`
//! sdk::info(&ctx, "request", &[fields! { "id" => 42, "user" => "alice" }]);
//! ```

/// Log a message with automatic formatting.
///
/// Field maps may follow the format arguments after a `;`.
///
/// # Examples
///
/// ```
/// # use plugin_log::{Context, LogLevel, Role};
/// use plugin_log::{fields, log};
/// let ctx = Context::new();
/// log!(&ctx, Role::Provider, LogLevel::Info, "Simple message");
/// log!(&ctx, Role::Provider, LogLevel::Error, "Error code: {}", 500);
/// log!(&ctx, Role::Provider, LogLevel::Warn, "Retrying {}", "apply"; fields! { "attempt" => 2 });
/// ```
#[macro_export]
macro_rules! log {
    ($ctx:expr, $role:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($fields:expr),+ $(,)?) => {
        $crate::scoped::emit($ctx, $role, $level, format!($fmt $(, $arg)*), &[$($fields),+])
    };
    ($ctx:expr, $role:expr, $level:expr, $($arg:tt)+) => {
        $crate::scoped::emit($ctx, $role, $level, format!($($arg)+), &[])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($ctx:expr, $role:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $role, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($ctx:expr, $role:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $role, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use plugin_log::appenders::MemoryAppender;
/// use plugin_log::{fields, info, sdk, shared, Context, LogOutput, Role, RootOptions};
///
/// let memory = MemoryAppender::new();
/// let ctx = sdk::new_root_logger(
///     &Context::new(),
///     RootOptions::new().output(LogOutput::Appender(shared(memory.clone()))),
/// );
///
/// info!(&ctx, Role::Sdk, "user {} signed in", "alice"; fields! { "session" => "s-1" });
///
/// let entries = memory.entries();
/// assert_eq!(entries[0].message, "user alice signed in");
/// assert_eq!(entries[0].field("session").and_then(|v| v.as_str()), Some("s-1"));
/// ```
#[macro_export]
macro_rules! info {
    ($ctx:expr, $role:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $role, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($ctx:expr, $role:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $role, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use plugin_log::{Context, Role};
/// use plugin_log::error;
/// let ctx = Context::new();
/// error!(&ctx, Role::Sdk, "Failed to connect to {}", "db.internal");
/// ```
#[macro_export]
macro_rules! error {
    ($ctx:expr, $role:expr, $($arg:tt)+) => {
        $crate::log!($ctx, $role, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Build a [`LogFields`](crate::LogFields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use plugin_log::fields;
/// let fields = fields! { "user" => "alice", "attempt" => 3 };
/// assert_eq!(fields.len(), 2);
/// assert!(fields! {}.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::LogFields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::LogFields::new();
        $( fields.add_field($key, $value); )+
        fields
    }};
}

/// Public operations of one role, delegating to the shared implementation.
macro_rules! role_api {
    ($role:expr, $label:literal) => {
        use crate::core::{FieldValue, LogFields, RootOptions};
        use crate::scoped::{facade, registry, Context};
        use regex::Regex;

        #[doc = concat!("Install the ", $label, " root logger in a new context.")]
        ///
        /// See [`registry::new_root_logger`] for how a host sink is used.
        pub fn new_root_logger(ctx: &Context, options: RootOptions) -> Context {
            registry::new_root_logger(ctx, $role, options)
        }

        #[doc = concat!("Root options for the ", $label, " logger, level taken from the environment.")]
        ///
        /// See [`crate::scoped::Role::level_env_var`] for the variable read.
        pub fn root_options_from_env() -> RootOptions {
            registry::root_options_from_env($role)
        }

        #[doc = concat!("Bind a field to every later entry of the ", $label, " root logger.")]
        pub fn set_field(
            ctx: &Context,
            key: impl Into<String>,
            value: impl Into<FieldValue>,
        ) -> Context {
            registry::set_field(ctx, $role, key, value)
        }

        #[track_caller]
        pub fn trace(ctx: &Context, message: impl Into<String>, fields: &[LogFields]) {
            facade::trace(ctx, $role, message, fields);
        }

        #[track_caller]
        pub fn debug(ctx: &Context, message: impl Into<String>, fields: &[LogFields]) {
            facade::debug(ctx, $role, message, fields);
        }

        #[track_caller]
        pub fn info(ctx: &Context, message: impl Into<String>, fields: &[LogFields]) {
            facade::info(ctx, $role, message, fields);
        }

        #[track_caller]
        pub fn warn(ctx: &Context, message: impl Into<String>, fields: &[LogFields]) {
            facade::warn(ctx, $role, message, fields);
        }

        #[track_caller]
        pub fn error(ctx: &Context, message: impl Into<String>, fields: &[LogFields]) {
            facade::error(ctx, $role, message, fields);
        }

        /// Omit any entry that has one of `keys` among its fields.
        ///
        /// Each call adds to the existing configuration.
        ///
        /// ```text
        /// configuration = ["foo", "baz"]
        ///
        /// { msg = "...", fields = { foo, bar } }  -> omitted
        /// { msg = "...", fields = { bar } }       -> printed
        /// { msg = "...", fields = { baz, boo } }  -> omitted
        /// ```
        pub fn omit_log_with_field_keys<I, S>(ctx: &Context, keys: I) -> Context
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            registry::omit_log_with_field_keys(ctx, $role, keys)
        }

        /// Omit any entry whose message matches one of `expressions`.
        ///
        /// Each call adds to the existing configuration.
        pub fn omit_log_with_message_regexes<I>(ctx: &Context, expressions: I) -> Context
        where
            I: IntoIterator<Item = Regex>,
        {
            registry::omit_log_with_message_regexes(ctx, $role, expressions)
        }

        /// Omit any entry whose message contains one of `matching`.
        ///
        /// Each call adds to the existing configuration.
        pub fn omit_log_with_message_strings<I, S>(ctx: &Context, matching: I) -> Context
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            registry::omit_log_with_message_strings(ctx, $role, matching)
        }

        /// Replace with `***` the value of any per-call field named in `keys`.
        ///
        /// Each call adds to the existing configuration.
        pub fn mask_field_values_with_field_keys<I, S>(ctx: &Context, keys: I) -> Context
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            registry::mask_field_values_with_field_keys(ctx, $role, keys)
        }

        /// Replace with `***` every message span matching one of `expressions`.
        ///
        /// ```text
        /// configuration = [regex("(foo|bar)")]
        ///
        /// "banana apple foo"     -> "banana apple ***"
        /// "pineapple mango"      -> as-is
        /// ```
        pub fn mask_message_regexes<I>(ctx: &Context, expressions: I) -> Context
        where
            I: IntoIterator<Item = Regex>,
        {
            registry::mask_message_regexes(ctx, $role, expressions)
        }

        /// Replace with `***` every occurrence of one of `matching` in the message.
        ///
        /// Each call adds to the existing configuration.
        pub fn mask_message_strings<I, S>(ctx: &Context, matching: I) -> Context
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            registry::mask_message_strings(ctx, $role, matching)
        }
    };
}
