//! Logging for SDK code.
//!
//! The SDK root logger is named `sdk` unless told otherwise. Policies set
//! here only affect entries written through this module.
//!
//! # Example
//!
//! ```
//! use plugin_log::appenders::MemoryAppender;
//! use plugin_log::{fields, sdk, shared, Context, LogOutput, RootOptions};
//!
//! let memory = MemoryAppender::new();
//! let ctx = sdk::new_root_logger(
//!     &Context::new(),
//!     RootOptions::new().output(LogOutput::Appender(shared(memory.clone()))),
//! );
//! let ctx = sdk::mask_field_values_with_field_keys(&ctx, ["token"]);
//!
//! sdk::debug(&ctx, "req", &[fields! { "token" => "abc", "id" => "1" }]);
//!
//! let entries = memory.entries();
//! let entry = &entries[0];
//! assert_eq!(entry.field("token").and_then(|v| v.as_str()), Some("***"));
//! assert_eq!(entry.field("id").and_then(|v| v.as_str()), Some("1"));
//! ```

use crate::scoped::Role;

role_api!(Role::Sdk, "SDK");
