//! Tool recommendation: which tools, if any, a domain agent should be
//! nudged toward for this turn, layered on top of its static allow list.

use explore_core::{DomainAgent, Intent, ToolStrategy};

const DIRECT_CONFIDENCE_THRESHOLD: f32 = 0.8;
const ENHANCE_KEYWORDS: &[&str] = &["为什么", "怎么", "如何", "是什么", "什么是", "能不能", "会不会"];
const MULTIPLE_KEYWORDS: &[&str] = &["详细", "深入", "全面", "完整", "所有", "全部"];

pub fn select_tool_strategy(confidence: f32, message: &str) -> ToolStrategy {
    if confidence >= DIRECT_CONFIDENCE_THRESHOLD {
        return ToolStrategy::Direct;
    }
    if ENHANCE_KEYWORDS.iter().any(|k| message.contains(k)) {
        return ToolStrategy::Enhance;
    }
    if MULTIPLE_KEYWORDS.iter().any(|k| message.contains(k)) {
        return ToolStrategy::Multiple;
    }
    ToolStrategy::None
}

fn push_unique(tools: &mut Vec<String>, name: &str) {
    if !tools.iter().any(|t| t == name) {
        tools.push(name.to_string());
    }
}

pub fn select_tools_for_intent(intent: Intent, domain: DomainAgent) -> Vec<String> {
    if intent == Intent::Emotional {
        return Vec::new();
    }
    let mut tools = vec!["get_current_time".to_string()];
    match (intent, domain) {
        (Intent::Cognitive | Intent::Causal, DomainAgent::Science) => {
            push_unique(&mut tools, "simple_fact_lookup");
        }
        (Intent::Expressive, DomainAgent::Language) => {
            push_unique(&mut tools, "simple_dictionary");
            push_unique(&mut tools, "pronunciation_hint");
        }
        (Intent::Playful, DomainAgent::Science) => {
            push_unique(&mut tools, "image_generate_simple");
        }
        _ => {}
    }
    if tools.len() == 1 {
        match domain {
            DomainAgent::Science => push_unique(&mut tools, "simple_fact_lookup"),
            DomainAgent::Language => push_unique(&mut tools, "simple_dictionary"),
            DomainAgent::Humanities => {}
        }
    }
    tools
}

const TIME_KEYWORDS: &[&str] = &["时间", "现在", "今天", "几点", "什么时候", "日期"];
const IMAGE_KEYWORDS: &[&str] = &["图片", "图像", "示意图", "画", "图", "看"];
const LANGUAGE_KEYWORDS: &[&str] = &["单词", "英语", "怎么说", "发音", "意思", "意思是什么"];
const FACT_KEYWORDS: &[&str] = &["是什么", "什么是", "介绍", "了解", "知道"];

pub fn select_tools_by_keywords(message: &str, domain: DomainAgent) -> Vec<String> {
    let mut tools = Vec::new();
    if TIME_KEYWORDS.iter().any(|k| message.contains(k)) {
        push_unique(&mut tools, "get_current_time");
    }
    if domain == DomainAgent::Science && IMAGE_KEYWORDS.iter().any(|k| message.contains(k)) {
        push_unique(&mut tools, "image_generate_simple");
    }
    if domain == DomainAgent::Language && LANGUAGE_KEYWORDS.iter().any(|k| message.contains(k)) {
        push_unique(&mut tools, "simple_dictionary");
        push_unique(&mut tools, "pronunciation_hint");
    }
    if domain == DomainAgent::Science && FACT_KEYWORDS.iter().any(|k| message.contains(k)) {
        push_unique(&mut tools, "simple_fact_lookup");
    }
    tools
}

/// The full selection: strategy `none` short-circuits to no tools;
/// otherwise the intent-based and keyword-based picks are concatenated and
/// deduplicated in first-seen order.
pub fn select_tools(
    strategy: ToolStrategy,
    intent: Intent,
    domain: DomainAgent,
    message: &str,
) -> Vec<String> {
    if strategy == ToolStrategy::None {
        return Vec::new();
    }
    let mut tools = select_tools_for_intent(intent, domain);
    for t in select_tools_by_keywords(message, domain) {
        push_unique(&mut tools, &t);
    }
    tools
}
