//! Tests for explore-agent: SessionStore, the bounded tool-call loop, and
//! the domain agents that sit on top of it.

use explore_agent::domain_agent::{run_domain_agent, TurnContext};
use explore_agent::tool_loop::{self, ToolLoopConfig};
use explore_agent::{SessionStore, MAX_LOG_LEN};
use explore_core::{DomainAgent, Error, Message, Modality, SessionKey, ToolCall};
use explore_llm::{GenerateReply, MockAdapter};
use explore_tools::create_default_registry;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// ===========================================================================
// SessionStore / Session
// ===========================================================================

#[tokio::test]
async fn session_store_touch_or_create_returns_same_session() {
    let store = SessionStore::new();
    let key = SessionKey::new("s1");
    let a = store.touch_or_create(&key);
    let b = store.touch_or_create(&key);
    a.append(Message::user("hello", Modality::Text)).await;
    assert_eq!(b.len().await, 1);
}

#[tokio::test]
async fn session_store_get_missing_returns_none() {
    let store = SessionStore::new();
    assert!(store.get(&SessionKey::new("missing")).is_none());
}

#[tokio::test]
async fn session_store_remove() {
    let store = SessionStore::new();
    let key = SessionKey::new("removable");
    store.touch_or_create(&key);
    assert!(store.remove(&key).is_some());
    assert!(store.get(&key).is_none());
}

#[tokio::test]
async fn session_log_caps_at_max_len() {
    let store = SessionStore::new();
    let session = store.touch_or_create(&SessionKey::new("full"));
    for i in 0..(MAX_LOG_LEN + 10) {
        session.append(Message::user(format!("msg {i}"), Modality::Text)).await;
    }
    assert_eq!(session.len().await, MAX_LOG_LEN);
}

#[tokio::test]
async fn session_recent_windows_by_rounds() {
    let store = SessionStore::new();
    let session = store.touch_or_create(&SessionKey::new("windowed"));
    for i in 0..10 {
        session.append(Message::user(format!("msg {i}"), Modality::Text)).await;
    }
    let recent = session.recent(2).await;
    assert_eq!(recent.len(), 4);
    assert_eq!(recent.last().unwrap().content, "msg 9");
}

#[tokio::test]
async fn session_scratch_get_set() {
    let store = SessionStore::new();
    let session = store.touch_or_create(&SessionKey::new("scratch"));
    assert!(session.get_scratch("key").await.is_none());
    session.set_scratch("key", json!({"a": 1})).await;
    assert_eq!(session.get_scratch("key").await, Some(json!({"a": 1})));
}

#[tokio::test]
async fn session_store_sweep_idle_leaves_nothing_to_evict_when_fresh() {
    let store = SessionStore::new();
    store.touch_or_create(&SessionKey::new("fresh"));
    let evicted = store.sweep_idle().await;
    assert_eq!(evicted, 0);
    assert_eq!(store.len(), 1);
}

// ===========================================================================
// tool_loop
// ===========================================================================

fn user_history(text: &str) -> Vec<Message> {
    vec![Message::user(text, Modality::Text)]
}

#[tokio::test]
async fn tool_loop_returns_immediately_without_tool_calls() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: "直接回答".to_string(),
        tool_calls: Vec::new(),
    }]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("你好"),
        &["get_current_time"],
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await
    .unwrap();
    assert_eq!(outcome.content, "直接回答");
    assert_eq!(outcome.generate_calls, 1);
    assert!(outcome.tools_used.is_empty());
}

#[tokio::test]
async fn tool_loop_executes_bound_tool_then_returns() {
    let adapter = MockAdapter::new(vec![
        GenerateReply {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "tc-1".to_string(),
                name: "get_current_time".to_string(),
                arguments: "{}".to_string(),
            }],
        },
        GenerateReply {
            content: "现在是下午".to_string(),
            tool_calls: Vec::new(),
        },
    ]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("现在几点了"),
        &["get_current_time"],
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await
    .unwrap();
    assert_eq!(outcome.content, "现在是下午");
    assert_eq!(outcome.tools_used, vec!["get_current_time"]);
    assert_eq!(outcome.generate_calls, 2);
}

#[tokio::test]
async fn tool_loop_skips_tool_calls_outside_allow_list() {
    let adapter = MockAdapter::new(vec![
        GenerateReply {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "tc-1".to_string(),
                name: "simple_dictionary".to_string(),
                arguments: "{}".to_string(),
            }],
        },
        GenerateReply {
            content: "好的".to_string(),
            tool_calls: Vec::new(),
        },
    ]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("hi"),
        &["get_current_time"], // simple_dictionary not bound
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await
    .unwrap();
    assert!(outcome.tools_used.is_empty());
}

#[tokio::test]
async fn tool_loop_skips_undecodable_arguments() {
    let adapter = MockAdapter::new(vec![
        GenerateReply {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "tc-1".to_string(),
                name: "get_current_time".to_string(),
                arguments: "not json".to_string(),
            }],
        },
        GenerateReply {
            content: "好的".to_string(),
            tool_calls: Vec::new(),
        },
    ]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("hi"),
        &["get_current_time"],
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await
    .unwrap();
    assert!(outcome.tools_used.is_empty());
}

#[tokio::test]
async fn tool_loop_does_not_record_a_tool_that_errors() {
    let adapter = MockAdapter::new(vec![
        GenerateReply {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "tc-1".to_string(),
                name: "simple_dictionary".to_string(),
                arguments: "{}".to_string(), // valid JSON, missing required "word"
            }],
        },
        GenerateReply {
            content: "好的".to_string(),
            tool_calls: Vec::new(),
        },
    ]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("hi"),
        &["simple_dictionary"],
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await
    .unwrap();
    assert!(outcome.tools_used.is_empty());
    assert!(outcome.tool_results.is_empty());
}

#[tokio::test]
async fn tool_loop_caps_generate_calls_at_depth_plus_one() {
    // The model keeps asking for tools every round, forcing the loop to
    // exhaust max_depth and fall back to the final integration call.
    let always_tool_call = || GenerateReply {
        content: String::new(),
        tool_calls: vec![ToolCall {
            id: "tc".to_string(),
            name: "get_current_time".to_string(),
            arguments: "{}".to_string(),
        }],
    };
    let adapter = MockAdapter::new(vec![
        always_tool_call(),
        always_tool_call(),
        always_tool_call(),
        GenerateReply {
            content: "最终回答".to_string(),
            tool_calls: Vec::new(),
        },
    ]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let config = ToolLoopConfig {
        max_depth: 3,
        deadline: Duration::from_secs(10),
    };
    let outcome = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("hi"),
        &["get_current_time"],
        &[],
        &config,
        &cancel,
    )
    .await
    .unwrap();
    assert_eq!(outcome.generate_calls, 4); // 3 rounds + 1 final integration call
    assert_eq!(outcome.content, "最终回答");
    assert_eq!(outcome.tools_used.len(), 3);
}

#[tokio::test]
async fn tool_loop_propagates_cancellation() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: "unreachable".to_string(),
        tool_calls: Vec::new(),
    }]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = tool_loop::run(
        &adapter,
        &tools,
        "system",
        &user_history("hi"),
        &["get_current_time"],
        &[],
        &ToolLoopConfig::default(),
        &cancel,
    )
    .await;
    assert!(matches!(result, Err(Error::Cancelled)));
}

// ===========================================================================
// domain_agent
// ===========================================================================

#[tokio::test]
async fn domain_agent_truncates_to_max_sentences() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: "第一句。第二句。第三句。".to_string(),
        tool_calls: Vec::new(),
    }]);
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let ctx = TurnContext {
        history: &user_history("银杏叶是什么"),
        recommended_tools: &[],
        use_ai_model: true,
        age: 8,
    };
    let turn = run_domain_agent(DomainAgent::Science, &adapter, &tools, ctx, 2, &cancel)
        .await
        .unwrap();
    assert_eq!(turn.content, "第一句。第二句。");
}

#[tokio::test]
async fn domain_agent_falls_back_when_model_unavailable_and_disabled() {
    struct AlwaysFails;
    #[async_trait::async_trait]
    impl explore_llm::ModelAdapter for AlwaysFails {
        fn name(&self) -> &str {
            "fails"
        }
        async fn stream(
            &self,
            _request: explore_llm::GenerateRequest,
        ) -> explore_llm::AdapterResult<explore_llm::ModelStream> {
            Err(explore_llm::AdapterError::RequestFailed("down".to_string()))
        }
    }
    let adapter = AlwaysFails;
    let tools = create_default_registry();
    let cancel = CancellationToken::new();
    let ctx = TurnContext {
        history: &user_history("月亮是什么"),
        recommended_tools: &[],
        use_ai_model: false,
        age: 5,
    };
    let turn = run_domain_agent(DomainAgent::Science, &adapter, &tools, ctx, 3, &cancel)
        .await
        .unwrap();
    assert!(turn.content.contains("离线"));
    assert!(turn.tools_used.is_empty());
}
