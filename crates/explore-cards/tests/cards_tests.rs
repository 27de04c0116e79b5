//! Integration tests for the three-card fan-out generator.

use explore_cards::{generate, CardRequest, CardType};
use explore_core::Error;
use explore_llm::MockAdapter;

#[tokio::test]
async fn generate_returns_fixed_order_regardless_of_input() {
    let adapter = MockAdapter::echo();
    let req = CardRequest {
        object_name: "蝴蝶".to_string(),
        object_category: "自然类".to_string(),
        age: 7,
        keywords: vec![],
    };
    let resp = generate(&adapter, &req, false).await.unwrap();
    assert_eq!(
        resp.cards.map(|c| c.card_type),
        [CardType::Science, CardType::Poetry, CardType::English]
    );
}

#[tokio::test]
async fn generate_rejects_age_outside_range() {
    let adapter = MockAdapter::echo();
    let req = CardRequest {
        object_name: "蝴蝶".to_string(),
        object_category: "自然类".to_string(),
        age: 1,
        keywords: vec![],
    };
    let result = generate(&adapter, &req, false).await;
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[tokio::test]
async fn generate_uses_known_object_table_for_fallback() {
    let adapter = MockAdapter::echo();
    let req = CardRequest {
        object_name: "太阳".to_string(),
        object_category: "自然类".to_string(),
        age: 12,
        keywords: vec![],
    };
    let resp = generate(&adapter, &req, false).await.unwrap();
    assert_eq!(
        resp.cards[1].content["poemSource"],
        "《忆江南》- 白居易"
    );
}
