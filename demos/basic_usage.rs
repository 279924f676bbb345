//! Basic plugin logging example
//!
//! Demonstrates a host sink, SDK and provider root loggers, bound fields and
//! masking rules.
//!
//! Run with: cargo run --example basic_usage

use plugin_log::prelude::*;
use plugin_log::{fields, register_sink};

fn main() -> Result<()> {
    println!("=== Plugin Log - Basic Usage Example ===\n");

    // The host owns the sink; plugins only ever see derived loggers
    let ctx = register_sink(
        &Context::new(),
        LoggerOptions {
            level: Some(LogLevel::Debug),
            output: LogOutput::Stdout,
            include_location: true,
            ..LoggerOptions::default()
        },
    );

    // PLUGIN_LOG_SDK=warn would quiet the SDK logger without touching the host
    let ctx = sdk::new_root_logger(&ctx, sdk::root_options_from_env());
    let ctx = provider::new_root_logger(&ctx, RootOptions::new().level(LogLevel::Info));

    println!("1. Logging through both roles:");
    sdk::debug(&ctx, "serving plugin protocol", &[fields! { "version" => 6 }]);
    provider::debug(&ctx, "provider debug (hidden)", &[]);
    provider::info(&ctx, "configuring provider", &[]);

    println!("\n2. Bound fields:");
    let request_ctx = provider::set_field(&ctx, "request_id", "req-7f3a");
    provider::info(&request_ctx, "reading resource", &[]);

    println!("\n3. Omission and masking:");
    let ctx = provider::mask_field_values_with_field_keys(&ctx, ["api_token"]);
    let ctx = provider::mask_message_strings(&ctx, ["hunter2"]);
    let ctx = provider::omit_log_with_message_strings(&ctx, ["heartbeat"]);
    provider::info(
        &ctx,
        "authenticating with password hunter2",
        &[fields! { "api_token" => "tok-123", "user" => "admin" }],
    );
    provider::info(&ctx, "heartbeat (hidden)", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
