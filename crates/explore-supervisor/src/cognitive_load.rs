//! Cognitive-load assessment: how much the child can take in this turn,
//! and the pedagogical strategy that follows from it.

use crate::json_extract;
use explore_core::{CognitiveLoadAdvice, Strategy, SupervisorState};
use explore_llm::{GenerateRequest, ModelAdapter};
use serde::Deserialize;

pub fn assess_by_rules(state: &SupervisorState) -> CognitiveLoadAdvice {
    if state.conversation_rounds > 5 {
        return advice(Strategy::Socratic, "too many rounds without resolution", 2);
    }
    if state.recent_output_len > 500 {
        return advice(Strategy::Pause, "recent output too long", 1);
    }
    if state.user_age <= 6 {
        return advice(Strategy::Brief, "young child, keep it short", 3);
    }
    if state.user_age <= 12 {
        return advice(Strategy::Analogy, "school-age child, use analogies", 5);
    }
    advice(Strategy::Deep, "older child, can go deeper", 7)
}

fn advice(strategy: Strategy, reason: &str, max_sentences: u8) -> CognitiveLoadAdvice {
    CognitiveLoadAdvice {
        strategy,
        reason: reason.to_string(),
        max_sentences,
    }
}

/// Two strategies may substitute for each other only within the same
/// compatibility group; `暂停探索` and `反问引导` are each alone in their group.
fn compatible(a: Strategy, b: Strategy) -> bool {
    use Strategy::*;
    let group = |s: Strategy| match s {
        Brief | Analogy | Deep => 0,
        Socratic => 1,
        Pause => 2,
    };
    group(a) == group(b)
}

#[derive(Deserialize)]
struct RawAdvice {
    strategy: Strategy,
    reason: String,
    max_sentences: u8,
}

/// Attempt to refine the rule-based advice with the model, but only when
/// the conversation has gone on long enough or recent output has gotten
/// long enough to warrant the extra call, and only accept an override in
/// the same compatibility group as the rule-based result.
pub async fn assess(
    adapter: Option<&dyn ModelAdapter>,
    use_ai_model: bool,
    state: &SupervisorState,
) -> CognitiveLoadAdvice {
    let rule_based = assess_by_rules(state);
    let should_attempt_llm = state.conversation_rounds > 3 || state.recent_output_len > 300;
    if !use_ai_model || !should_attempt_llm {
        return rule_based;
    }
    let Some(adapter) = adapter else {
        return rule_based;
    };
    let prompt = format!(
        "孩子{}岁，已经聊了{}轮，最近一次回答有{}字。请评估认知负荷，\
         以 JSON 输出 {{\"strategy\":\"简短讲解|类比讲解|深入讲解|反问引导|暂停探索\",\
         \"reason\":..,\"max_sentences\":整数}}。",
        state.user_age, state.conversation_rounds, state.recent_output_len
    );
    let request = GenerateRequest::new(vec![]).with_system(&prompt);
    match adapter.generate(request).await {
        Ok(reply) => match json_extract::extract::<RawAdvice>(&reply.content) {
            Some(raw) if compatible(raw.strategy, rule_based.strategy) => CognitiveLoadAdvice {
                strategy: raw.strategy,
                reason: raw.reason,
                max_sentences: raw.max_sentences,
            },
            _ => rule_based,
        },
        Err(_) => rule_based,
    }
}
