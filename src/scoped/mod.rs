//! Context-scoped root loggers
//!
//! - `context`: the immutable carrier and the `Role` slots it holds
//! - `registry`: root logger installation, bound fields and policy extension
//! - `facade`: leveled emit operations running the policy
//! - `sink`: host-side sink registration

pub mod context;
pub mod facade;
pub mod registry;
pub mod sink;

pub use context::{Context, Role};
pub use facade::emit;
pub use registry::{new_root_logger, set_field};
pub use sink::{
    register_sink, register_sink_from_env, register_sink_from_env_vars, ENV_LOG, ENV_LOG_PATH,
    ENV_LOG_PROVIDER, ENV_LOG_SDK,
};
