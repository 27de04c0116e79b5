//! Fans the card request out into three independent subtasks, each racing
//! its own 10-second deadline, and recombines them in a fixed order.

use crate::fallback;
use crate::types::{Card, CardRequest, CardType, CardsResponse};
use explore_core::{Error, Result};
use explore_llm::{GenerateRequest, ModelAdapter};
use std::time::Duration;

const CARD_DEADLINE: Duration = Duration::from_secs(10);
const RETRY_DELAY: Duration = Duration::from_millis(100);

fn age_bucket(age: u8) -> &'static str {
    if age <= 6 {
        "3-6"
    } else if age <= 12 {
        "7-12"
    } else {
        "13-18"
    }
}

fn prompt_for(card_type: CardType, req: &CardRequest) -> String {
    let schema = match card_type {
        CardType::Science => {
            r#"{"name":..,"explanation":..,"facts":[".."],"funFact":".."}"#
        }
        CardType::Poetry => {
            r#"{"poem":..,"poemSource":..,"explanation":..,"context":".."}"#
        }
        CardType::English => {
            r#"{"keywords":[".."],"expressions":[".."],"pronunciation":".."}"#
        }
    };
    format!(
        "为{}（类别：{}，适合{}岁儿童阅读）生成一张{:?}卡片，严格以 JSON 输出，字段为 {}。",
        req.object_name,
        req.object_category,
        age_bucket(req.age),
        card_type,
        schema
    )
}

async fn extract_with_retry(
    adapter: &dyn ModelAdapter,
    card_type: CardType,
    req: &CardRequest,
) -> Option<serde_json::Value> {
    let prompt = prompt_for(card_type, req);
    let first = adapter
        .generate(GenerateRequest::new(vec![]).with_system(&prompt))
        .await
        .ok()?;
    if let Some(v) = extract_json(&first.content) {
        return Some(v);
    }

    tokio::time::sleep(RETRY_DELAY).await;
    let retry_prompt = format!(
        "{}\n上一次的回复不是合法 JSON，请只输出 JSON 对象，不要任何其他文字。",
        prompt
    );
    let second = adapter
        .generate(GenerateRequest::new(vec![]).with_system(&retry_prompt))
        .await
        .ok()?;
    extract_json(&second.content)
}

fn extract_json(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

fn title_for(card_type: CardType, object_name: &str) -> String {
    match card_type {
        CardType::Science => format!("{}的科学知识", object_name),
        CardType::Poetry => format!("古人怎么看{}", object_name),
        CardType::English => format!("用英语说{}", object_name),
    }
}

/// Build a single card of the given type. Exposed for the streaming
/// variant, which needs to run the three card futures independently
/// instead of through `tokio::join!`.
pub async fn build_card_public(
    adapter: &dyn ModelAdapter,
    card_type: CardType,
    req: &CardRequest,
    use_ai_model: bool,
) -> Card {
    build_card(adapter, card_type, req, use_ai_model).await
}

async fn build_card(
    adapter: &dyn ModelAdapter,
    card_type: CardType,
    req: &CardRequest,
    use_ai_model: bool,
) -> Card {
    if !use_ai_model {
        return fallback_for(card_type, &req.object_name);
    }
    let result = tokio::time::timeout(CARD_DEADLINE, extract_with_retry(adapter, card_type, req))
        .await;
    match result {
        Ok(Some(content)) => Card {
            card_type,
            title: title_for(card_type, &req.object_name),
            content,
        },
        _ => fallback_for(card_type, &req.object_name),
    }
}

fn fallback_for(card_type: CardType, object_name: &str) -> Card {
    match card_type {
        CardType::Science => fallback::science_card(object_name),
        CardType::Poetry => fallback::poetry_card(object_name),
        CardType::English => fallback::english_card(object_name),
    }
}

/// Generate the ordered `[science, poetry, english]` triple.
pub async fn generate(
    adapter: &dyn ModelAdapter,
    req: &CardRequest,
    use_ai_model: bool,
) -> Result<CardsResponse> {
    req.validate()?;
    let (science, poetry, english) = tokio::join!(
        build_card(adapter, CardType::Science, req, use_ai_model),
        build_card(adapter, CardType::Poetry, req, use_ai_model),
        build_card(adapter, CardType::English, req, use_ai_model),
    );
    Ok(CardsResponse {
        cards: [science, poetry, english],
    })
}
