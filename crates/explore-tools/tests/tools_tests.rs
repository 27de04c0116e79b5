//! Tests for explore-tools: ToolResult, ToolRegistry, per-agent allow
//! lists, and the five built-in tools.

use explore_core::DomainAgent;
use explore_tools::*;
use serde_json::json;

#[test]
fn tool_result_text() {
    let r = ToolResult::text("hello");
    assert!(!r.is_error());
    assert_eq!(r.to_content_string(), "hello");
}

#[test]
fn tool_result_error() {
    let r = ToolResult::error("boom");
    assert!(r.is_error());
    assert!(r.to_content_string().contains("boom"));
}

#[tokio::test]
async fn registry_executes_registered_tool() {
    let registry = create_default_registry();
    let result = registry.execute("get_current_time", json!({})).await;
    assert!(!result.is_error());
}

#[tokio::test]
async fn registry_reports_missing_tool() {
    let registry = create_default_registry();
    let result = registry.execute("does_not_exist", json!({})).await;
    assert!(result.is_error());
}

#[test]
fn registry_definitions_for_filters_and_preserves_order() {
    let registry = create_default_registry();
    let defs = registry.definitions_for(&[
        "simple_dictionary".to_string(),
        "get_current_time".to_string(),
        "not_a_tool".to_string(),
    ]);
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].name, "simple_dictionary");
    assert_eq!(defs[1].name, "get_current_time");
}

#[test]
fn allowed_for_science_excludes_language_tools() {
    let allowed = allowed_for(DomainAgent::Science);
    assert!(allowed.contains(&"simple_fact_lookup"));
    assert!(!allowed.contains(&"simple_dictionary"));
}

#[test]
fn allowed_for_language_excludes_science_tools() {
    let allowed = allowed_for(DomainAgent::Language);
    assert!(allowed.contains(&"pronunciation_hint"));
    assert!(!allowed.contains(&"simple_fact_lookup"));
}

#[test]
fn allowed_for_humanities_has_no_fact_or_dictionary_tools() {
    let allowed = allowed_for(DomainAgent::Humanities);
    assert!(!allowed.contains(&"simple_fact_lookup"));
    assert!(!allowed.contains(&"simple_dictionary"));
}

#[tokio::test]
async fn clock_tool_returns_structured_fields() {
    let registry = create_default_registry();
    let result = registry.execute("get_current_time", json!({})).await;
    match result {
        ToolResult::Json(v) => {
            assert!(v.get("year").is_some());
            assert!(v.get("timestamp").is_some());
        }
        other => panic!("expected json, got {:?}", other),
    }
}

#[tokio::test]
async fn fact_lookup_requires_query() {
    let registry = create_default_registry();
    let result = registry.execute("simple_fact_lookup", json!({})).await;
    assert!(result.is_error());
}

#[tokio::test]
async fn dictionary_unknown_word_does_not_error() {
    let registry = create_default_registry();
    let result = registry
        .execute("simple_dictionary", json!({"word": "xyzzy"}))
        .await;
    assert!(!result.is_error());
}

#[tokio::test]
async fn image_gen_reports_unavailable_status() {
    let registry = create_default_registry();
    let result = registry
        .execute("image_generate_simple", json!({"description": "月亮"}))
        .await;
    match result {
        ToolResult::Json(v) => assert_eq!(v["status"], "unavailable"),
        other => panic!("expected json, got {:?}", other),
    }
}
