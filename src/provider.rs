//! Logging for provider code.
//!
//! Mirrors [`crate::sdk`] with its own root logger (named `provider` by
//! default) and its own policy set.

use crate::scoped::Role;

role_api!(Role::Provider, "provider");
