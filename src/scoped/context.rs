//! Immutable context carrying loggers, their options and policies
//!
//! `Context` is cheap to clone: every slot is an `Arc`. Setters take `&self`
//! and return a new value, so a context handed to a callee can never be
//! changed behind the caller's back.

use crate::core::{
    Logger, LoggerOptions, DEFAULT_PROVIDER_ROOT_LOGGER_NAME, DEFAULT_SDK_ROOT_LOGGER_NAME,
};
use super::sink::{ENV_LOG_PROVIDER, ENV_LOG_SDK};
use crate::policy::PolicyStore;
use std::fmt;
use std::sync::Arc;

/// Which subsystem a logger slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Sdk,
    Provider,
}

impl Role {
    pub fn default_logger_name(self) -> &'static str {
        match self {
            Role::Sdk => DEFAULT_SDK_ROOT_LOGGER_NAME,
            Role::Provider => DEFAULT_PROVIDER_ROOT_LOGGER_NAME,
        }
    }

    /// Environment variable read for this role's root logger level
    pub fn level_env_var(self) -> &'static str {
        match self {
            Role::Sdk => ENV_LOG_SDK,
            Role::Provider => ENV_LOG_PROVIDER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_logger_name())
    }
}

#[derive(Debug, Clone, Default)]
struct RoleSlots {
    logger: Option<Arc<Logger>>,
    options: Option<Arc<LoggerOptions>>,
    policy: Option<Arc<PolicyStore>>,
}

#[derive(Debug, Clone, Default)]
struct SinkSlot {
    logger: Option<Arc<Logger>>,
    options: Option<Arc<LoggerOptions>>,
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    sink: SinkSlot,
    sdk: RoleSlots,
    provider: RoleSlots,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self, role: Role) -> &RoleSlots {
        match role {
            Role::Sdk => &self.sdk,
            Role::Provider => &self.provider,
        }
    }

    fn with_slots(&self, role: Role, update: impl FnOnce(&mut RoleSlots)) -> Context {
        let mut next = self.clone();
        match role {
            Role::Sdk => update(&mut next.sdk),
            Role::Provider => update(&mut next.provider),
        }
        next
    }

    /// Host-provided sink logger, if one was injected
    pub fn sink(&self) -> Option<&Arc<Logger>> {
        self.sink.logger.as_ref()
    }

    /// Options the host sink was created with
    pub fn sink_options(&self) -> Option<&Arc<LoggerOptions>> {
        self.sink.options.as_ref()
    }

    #[must_use]
    pub fn with_sink(&self, logger: Arc<Logger>, options: Arc<LoggerOptions>) -> Context {
        let mut next = self.clone();
        next.sink = SinkSlot {
            logger: Some(logger),
            options: Some(options),
        };
        next
    }

    pub fn root_logger(&self, role: Role) -> Option<&Arc<Logger>> {
        self.slots(role).logger.as_ref()
    }

    #[must_use]
    pub fn with_root_logger(&self, role: Role, logger: Arc<Logger>) -> Context {
        self.with_slots(role, |slots| slots.logger = Some(logger))
    }

    pub fn root_logger_options(&self, role: Role) -> Option<&Arc<LoggerOptions>> {
        self.slots(role).options.as_ref()
    }

    #[must_use]
    pub fn with_root_logger_options(&self, role: Role, options: Arc<LoggerOptions>) -> Context {
        self.with_slots(role, |slots| slots.options = Some(options))
    }

    pub fn policy(&self, role: Role) -> Option<&Arc<PolicyStore>> {
        self.slots(role).policy.as_ref()
    }

    #[must_use]
    pub fn with_policy(&self, role: Role, policy: Arc<PolicyStore>) -> Context {
        self.with_slots(role, |slots| slots.policy = Some(policy))
    }

    /// Copy of the role's policy for extension; empty when none is set
    pub(crate) fn policy_for_update(&self, role: Role) -> PolicyStore {
        self.policy(role)
            .map(|store| PolicyStore::clone(store))
            .unwrap_or_default()
    }
}
