//! Intent classification: an optional LLM pass, with a rule table as both
//! the gate for invalid LLM output and the unconditional fallback.

use crate::json_extract;
use explore_core::{Intent, IntentResult};
use explore_llm::{GenerateRequest, ModelAdapter};
use serde::Deserialize;

const CAUSAL: &[&str] = &["为什么", "怎么会", "怎么形成"];
const EXPRESSIVE: &[&str] = &["怎么说", "怎么形容", "用英语"];
const PLAYFUL: &[&str] = &["好玩", "试试", "可以玩"];
const EMOTIONAL: &[&str] = &["不懂", "太难", "不明白"];

/// The rule table, in priority order — first match wins.
pub fn assess_by_rules(text: &str) -> IntentResult {
    let (intent, reason) = if CAUSAL.iter().any(|m| text.contains(m)) {
        (Intent::Causal, "matched causal keyword")
    } else if EXPRESSIVE.iter().any(|m| text.contains(m)) {
        (Intent::Expressive, "matched expressive keyword")
    } else if PLAYFUL.iter().any(|m| text.contains(m)) {
        (Intent::Playful, "matched playful keyword")
    } else if EMOTIONAL.iter().any(|m| text.contains(m)) {
        (Intent::Emotional, "matched emotional keyword")
    } else {
        (Intent::Cognitive, "default intent")
    };
    IntentResult {
        intent,
        confidence: 0.5,
        reason: reason.to_string(),
    }
}

#[derive(Deserialize)]
struct RawIntent {
    intent: Intent,
    confidence: f32,
    reason: String,
}

/// Assess intent, preferring the model when configured and enabled. Any
/// failure — adapter error, empty reply, unparseable or invalid JSON —
/// falls back to the rule table with the teacher's degraded-result literal.
pub async fn assess(
    adapter: Option<&dyn ModelAdapter>,
    use_ai_model: bool,
    text: &str,
) -> IntentResult {
    if use_ai_model {
        if let Some(adapter) = adapter {
            let prompt = format!(
                "判断下面这句话的意图类型，只能是认知型/探因型/表达型/游戏型/情绪型之一，\
                 以 JSON 格式输出 {{\"intent\":..,\"confidence\":0到1之间的小数,\"reason\":..}}。\n句子：{}",
                text
            );
            let request = GenerateRequest::new(vec![]).with_system(&prompt);
            if let Ok(reply) = adapter.generate(request).await {
                if let Some(raw) = json_extract::extract::<RawIntent>(&reply.content) {
                    return IntentResult {
                        intent: raw.intent,
                        confidence: raw.confidence,
                        reason: raw.reason,
                    };
                }
            }
        }
    }
    let mut fallback = assess_by_rules(text);
    if use_ai_model {
        fallback.reason = "intent agent unavailable, used default intent".to_string();
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causal_keyword_wins_first() {
        let r = assess_by_rules("为什么天是蓝色的");
        assert_eq!(r.intent, Intent::Causal);
    }

    #[test]
    fn expressive_keyword() {
        assert_eq!(assess_by_rules("苹果用英语怎么说").intent, Intent::Expressive);
    }

    #[test]
    fn playful_keyword() {
        assert_eq!(assess_by_rules("这个好玩吗").intent, Intent::Playful);
    }

    #[test]
    fn emotional_keyword() {
        assert_eq!(assess_by_rules("太难了我不懂").intent, Intent::Emotional);
    }

    #[test]
    fn defaults_to_cognitive() {
        assert_eq!(assess_by_rules("银杏叶是什么颜色").intent, Intent::Cognitive);
    }

    #[tokio::test]
    async fn assess_without_adapter_uses_rules() {
        let result = assess(None, true, "为什么会下雨").await;
        assert_eq!(result.intent, Intent::Causal);
        assert_eq!(result.reason, "intent agent unavailable, used default intent");
    }

    #[tokio::test]
    async fn assess_with_ai_disabled_uses_plain_rules() {
        let result = assess(None, false, "为什么会下雨").await;
        assert_eq!(result.reason, "matched causal keyword");
    }
}
