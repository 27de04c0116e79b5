//! Tests for explore-llm: the `ModelAdapter` seam and its mock implementation.

use explore_core::{Message, Modality, ToolCall};
use explore_llm::{GenerateReply, GenerateRequest, ModelAdapter, MockAdapter};

#[tokio::test]
async fn mock_adapter_generate_returns_scripted_reply() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: "银杏是一种古老的树".into(),
        tool_calls: vec![],
    }]);
    let req = GenerateRequest::new(vec![Message::user("银杏是什么", Modality::Text)]);
    let reply = adapter.generate(req).await.unwrap();
    assert_eq!(reply.content, "银杏是一种古老的树");
    assert_eq!(adapter.call_count(), 1);
}

#[tokio::test]
async fn mock_adapter_repeats_last_reply_past_script_end() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: "first".into(),
        tool_calls: vec![],
    }]);
    let req = || GenerateRequest::new(vec![Message::user("hi", Modality::Text)]);
    adapter.generate(req()).await.unwrap();
    let second = adapter.generate(req()).await.unwrap();
    assert_eq!(second.content, "first");
}

#[tokio::test]
async fn mock_adapter_stream_drains_to_same_content_as_generate() {
    let adapter = MockAdapter::echo();
    let req = GenerateRequest::new(vec![Message::user("hi", Modality::Text)]);
    let reply = adapter.generate(req).await.unwrap();
    assert_eq!(reply.content, "(mock) acknowledged");
}

#[tokio::test]
async fn mock_adapter_roundtrips_tool_calls_through_stream() {
    let adapter = MockAdapter::new(vec![GenerateReply {
        content: String::new(),
        tool_calls: vec![ToolCall {
            id: "tc-1".into(),
            name: "get_current_time".into(),
            arguments: "{}".into(),
        }],
    }]);
    let req = GenerateRequest::new(vec![Message::user("几点了", Modality::Text)]);
    let reply = adapter.generate(req).await.unwrap();
    assert_eq!(reply.tool_calls.len(), 1);
    assert_eq!(reply.tool_calls[0].name, "get_current_time");
}

#[test]
fn generate_request_builders() {
    let req = GenerateRequest::new(vec![]).with_system("be brief");
    assert_eq!(req.system.as_deref(), Some("be brief"));
}
