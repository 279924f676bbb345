//! Integration tests for plugin logging
//!
//! These tests verify:
//! - Root logger defaults with and without a host sink
//! - Omission and masking rules end to end
//! - Context immutability across forked policy extensions
//! - JSON file output through an environment-configured sink

use plugin_log::appenders::{FileAppender, MemoryAppender};
use plugin_log::core::{FieldValue, LogFields, LogLevel, LogOutput, LoggerOptions, RootOptions};
use plugin_log::scoped::{register_sink, register_sink_from_env_vars};
use plugin_log::{fields, provider, sdk, shared, Context, Role};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

fn capturing_sdk() -> (Context, MemoryAppender) {
    let memory = MemoryAppender::new();
    let ctx = sdk::new_root_logger(
        &Context::new(),
        RootOptions::new().output(LogOutput::Appender(shared(memory.clone()))),
    );
    (ctx, memory)
}

fn capturing_provider() -> (Context, MemoryAppender) {
    let memory = MemoryAppender::new();
    let ctx = provider::new_root_logger(
        &Context::new(),
        RootOptions::new().output(LogOutput::Appender(shared(memory.clone()))),
    );
    (ctx, memory)
}

// ============================================================================
// Root logger defaults
// ============================================================================

#[test]
fn test_standalone_logger_defaults_to_trace() {
    let (ctx, memory) = capturing_sdk();

    let options = ctx.root_logger_options(Role::Sdk).expect("options installed");
    assert_eq!(options.level, Some(LogLevel::Trace));

    sdk::trace(&ctx, "most verbose", &[]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Trace);
    assert_eq!(entries[0].name, "sdk");
    assert_eq!(entries[0].message, "most verbose");
}

#[test]
fn test_logging_without_root_logger_is_silent() {
    let ctx = Context::new();
    sdk::error(&ctx, "nobody listening", &[]);
    provider::info(&ctx, "nobody listening", &[fields! { "k" => "v" }]);
    assert!(ctx.root_logger(Role::Sdk).is_none());
}

#[test]
fn test_roles_do_not_share_loggers_or_policies() {
    let (ctx, sdk_memory) = capturing_sdk();
    let provider_memory = MemoryAppender::new();
    let ctx = provider::new_root_logger(
        &ctx,
        RootOptions::new().output(LogOutput::Appender(shared(provider_memory.clone()))),
    );
    let ctx = sdk::omit_log_with_message_strings(&ctx, ["hidden"]);

    sdk::info(&ctx, "hidden in sdk", &[]);
    provider::info(&ctx, "hidden in provider", &[]);

    assert!(sdk_memory.is_empty());
    assert_eq!(provider_memory.len(), 1);
    assert_eq!(provider_memory.entries()[0].name, "provider");
}

#[test]
fn test_host_sink_children_share_output() {
    let memory = MemoryAppender::new();
    let ctx = register_sink(
        &Context::new(),
        LoggerOptions {
            name: String::new(),
            level: Some(LogLevel::Info),
            output: LogOutput::Appender(shared(memory.clone())),
            json_format: true,
            independent_levels: true,
            ..LoggerOptions::default()
        },
    );
    let ctx = sdk::new_root_logger(&ctx, RootOptions::new().level(LogLevel::Debug));
    let ctx = provider::new_root_logger(&ctx, RootOptions::default());

    sdk::debug(&ctx, "sdk debug", &[]);
    provider::debug(&ctx, "provider debug dropped", &[]);
    provider::info(&ctx, "provider info", &[]);

    let names: Vec<(String, String)> = memory
        .entries()
        .into_iter()
        .map(|e| (e.name, e.message))
        .collect();
    assert_eq!(
        names,
        vec![
            ("sdk".to_string(), "sdk debug".to_string()),
            ("provider".to_string(), "provider info".to_string()),
        ]
    );
}

#[test]
fn test_provider_level_from_environment() {
    std::env::set_var("PLUGIN_LOG_PROVIDER", "warn");
    let memory = MemoryAppender::new();
    let ctx = provider::new_root_logger(
        &Context::new(),
        provider::root_options_from_env().output(LogOutput::Appender(shared(memory.clone()))),
    );

    provider::info(&ctx, "below env level", &[]);
    provider::warn(&ctx, "at env level", &[]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "at env level");
}

// ============================================================================
// Omission
// ============================================================================

#[test]
fn test_omit_by_field_key_drops_entry() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::omit_log_with_field_keys(&ctx, ["password"]);

    sdk::info(&ctx, "login", &[fields! { "password" => "x", "user" => "a" }]);

    assert!(memory.is_empty());
}

#[test]
fn test_omit_by_field_key_is_exact_match() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::omit_log_with_field_keys(&ctx, ["pass"]);

    sdk::info(&ctx, "login", &[fields! { "password" => "x" }]);

    assert_eq!(memory.len(), 1);
}

#[test]
fn test_omit_by_message_ignores_empty_fields() {
    let (ctx, memory) = capturing_provider();
    let ctx = provider::omit_log_with_message_regexes(&ctx, [Regex::new(r"^health check").unwrap()]);
    let ctx = provider::omit_log_with_message_strings(&ctx, ["noisy"]);

    provider::info(&ctx, "health check ok", &[]);
    provider::warn(&ctx, "something noisy happened", &[]);
    provider::info(&ctx, "kept", &[]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "kept");
}

#[test]
fn test_empty_rules_are_not_dropped() {
    let (ctx, memory) = capturing_sdk();
    let by_literal = sdk::omit_log_with_message_strings(&ctx, [""]);
    let by_key = sdk::omit_log_with_field_keys(&ctx, [""]);

    sdk::info(&by_literal, "any message", &[]);
    sdk::info(&by_key, "empty key", &[fields! { "" => "v" }]);
    sdk::info(&by_key, "other key", &[fields! { "k" => "v" }]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "other key");
}

#[test]
fn test_empty_mask_literal_leaves_message() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::mask_message_strings(&ctx, ["", "secret"]);

    sdk::info(&ctx, "a secret", &[]);

    assert_eq!(memory.entries()[0].message, "a ***");
}

#[test]
fn test_omission_short_circuits_masking() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::omit_log_with_field_keys(&ctx, ["password"]);
    let ctx = sdk::mask_message_strings(&ctx, ["login"]);

    sdk::info(&ctx, "login", &[fields! { "password" => "x" }]);

    assert!(memory.is_empty());
}

// ============================================================================
// Masking
// ============================================================================

#[test]
fn test_mask_message_string() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::mask_message_strings(&ctx, ["secret"]);

    sdk::warn(&ctx, "contains secret token", &[]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "contains *** token");
}

#[test]
fn test_mask_message_replaces_every_occurrence() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::mask_message_strings(&ctx, ["abc"]);
    let ctx = sdk::mask_message_regexes(&ctx, [Regex::new(r"\d{4}").unwrap()]);

    sdk::info(&ctx, "abc then abc, pin 1234 and 5678", &[]);

    assert_eq!(memory.entries()[0].message, "*** then ***, pin *** and ***");
}

#[test]
fn test_mask_field_value_keeps_siblings() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::mask_field_values_with_field_keys(&ctx, ["token"]);

    sdk::debug(&ctx, "req", &[fields! { "token" => "abc", "id" => "1" }]);

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.message, "req");
    assert_eq!(entry.field("token"), Some(&FieldValue::from("***")));
    assert_eq!(entry.field("id"), Some(&FieldValue::from("1")));
    assert_eq!(entry.fields.len(), 2);
}

#[test]
fn test_later_field_map_wins() {
    let (ctx, memory) = capturing_provider();

    provider::info(
        &ctx,
        "merge",
        &[
            fields! { "attempt" => 1, "host" => "a" },
            fields! { "attempt" => 2 },
        ],
    );

    let entries = memory.entries();
    let entry = &entries[0];
    assert_eq!(entry.field("attempt"), Some(&FieldValue::Int(2)));
    assert_eq!(entry.field("host"), Some(&FieldValue::from("a")));
}

#[test]
fn test_bound_field_appears_on_later_entries() {
    let (ctx, memory) = capturing_sdk();
    let bound = sdk::set_field(&ctx, "request_id", "r-42");

    sdk::info(&ctx, "before", &[]);
    sdk::info(&bound, "after", &[]);

    let entries = memory.entries();
    assert!(entries[0].field("request_id").is_none());
    assert_eq!(entries[1].field("request_id"), Some(&FieldValue::from("r-42")));
}

// ============================================================================
// Format macros
// ============================================================================

#[test]
fn test_format_macros_carry_fields_through_policy() {
    let (ctx, memory) = capturing_sdk();
    let ctx = sdk::mask_field_values_with_field_keys(&ctx, ["token"]);

    plugin_log::warn!(
        &ctx, Role::Sdk, "retry {} of {}", 2, 3;
        fields! { "token" => "t" },
        fields! { "op" => "apply" }
    );
    plugin_log::debug!(&ctx, Role::Sdk, "plain {}", "message");

    let entries = memory.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, LogLevel::Warn);
    assert_eq!(entries[0].message, "retry 2 of 3");
    assert_eq!(entries[0].field("token"), Some(&FieldValue::from("***")));
    assert_eq!(entries[0].field("op"), Some(&FieldValue::from("apply")));
    assert_eq!(entries[1].message, "plain message");
    assert!(entries[1].fields.is_empty());
}

// ============================================================================
// Context immutability
// ============================================================================

#[test]
fn test_policy_extension_is_additive_and_non_mutating() {
    let (ctx, _memory) = capturing_sdk();
    let first = sdk::omit_log_with_field_keys(&ctx, ["foo"]);
    let second = sdk::mask_field_values_with_field_keys(&first, ["bar"]);

    assert!(ctx.policy(Role::Sdk).is_none());
    let store = second.policy(Role::Sdk).expect("policy installed");
    assert_eq!(store.omit_log_with_field_keys(), &["foo".to_string()]);
    assert_eq!(store.mask_field_values_with_field_keys(), &["bar".to_string()]);
    assert!(first
        .policy(Role::Sdk)
        .expect("policy installed")
        .mask_field_values_with_field_keys()
        .is_empty());
}

#[test]
fn test_forked_contexts_do_not_see_each_other() {
    let (ctx, memory) = capturing_sdk();
    let omit_a = sdk::omit_log_with_message_strings(&ctx, ["alpha"]);
    let omit_b = sdk::omit_log_with_message_strings(&ctx, ["beta"]);

    sdk::info(&omit_a, "beta through a", &[]);
    sdk::info(&omit_b, "alpha through b", &[]);
    sdk::info(&omit_a, "alpha through a", &[]);
    sdk::info(&omit_b, "beta through b", &[]);

    let messages: Vec<String> = memory.entries().into_iter().map(|e| e.message).collect();
    assert_eq!(messages, vec!["beta through a", "alpha through b"]);
}

#[test]
fn test_duplicate_rules_are_noops() {
    let (ctx, _memory) = capturing_provider();
    let ctx = provider::mask_message_strings(&ctx, ["x", "x"]);
    let ctx = provider::mask_message_strings(&ctx, ["x"]);

    assert_eq!(ctx.policy(Role::Provider).unwrap().mask_message_strings().len(), 1);
}

// ============================================================================
// File output
// ============================================================================

#[test]
fn test_file_appender_json_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("plugin.jsonl");

    let appender = FileAppender::new(&log_file).expect("Failed to create appender");
    let ctx = provider::new_root_logger(
        &Context::new(),
        RootOptions::new()
            .level(LogLevel::Info)
            .output(LogOutput::Appender(shared(appender))),
    );
    let ctx = provider::mask_field_values_with_field_keys(&ctx, ["api_key"]);

    provider::debug(&ctx, "dropped by level", &[]);
    provider::info(
        &ctx,
        "configured\nwith newline",
        &[fields! { "api_key" => "k-123", "region" => "eu" }],
    );

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert_eq!(parsed["@level"], "info");
    assert_eq!(parsed["@module"], "provider");
    assert_eq!(parsed["@message"], "configured\nwith newline");
    assert_eq!(parsed["api_key"], "***");
    assert_eq!(parsed["region"], "eu");
    assert!(parsed.get("@timestamp").is_some());
    assert!(parsed.get("@caller").is_some());
}

#[test]
fn test_env_sink_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("sink.jsonl");
    std::env::set_var("PLUGIN_LOG_IT_LEVEL", "warn");
    std::env::set_var("PLUGIN_LOG_IT_PATH", &log_file);

    let ctx = register_sink_from_env_vars(&Context::new(), "PLUGIN_LOG_IT_LEVEL", "PLUGIN_LOG_IT_PATH")
        .expect("sink registered");
    let ctx = sdk::new_root_logger(&ctx, RootOptions::default());
    let ctx = sdk::set_field(&ctx, "plugin", "demo");

    sdk::info(&ctx, "below warn", &[]);
    sdk::error(&ctx, "failed", &[LogFields::new().with_field("code", 7)]);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert_eq!(parsed["@level"], "error");
    assert_eq!(parsed["@module"], "sdk");
    assert_eq!(parsed["plugin"], "demo");
    assert_eq!(parsed["code"], 7);
}
