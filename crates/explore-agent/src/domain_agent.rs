//! The three domain agents: a closed, statically-dispatched set selected by
//! a `match` on `DomainAgent`, never a dynamic registry lookup — there are
//! exactly three and that will not change at runtime.

use crate::tool_loop::{self, ToolLoopConfig};
use explore_core::{DomainAgent, Error, Message, Result};
use explore_llm::ModelAdapter;
use explore_tools::ToolRegistry;
use tokio_util::sync::CancellationToken;

pub struct TurnContext<'a> {
    pub history: &'a [Message],
    pub recommended_tools: &'a [String],
    pub use_ai_model: bool,
    pub age: u8,
}

pub struct DomainTurn {
    pub content: String,
    pub tools_used: Vec<String>,
}

pub async fn run_domain_agent(
    domain: DomainAgent,
    adapter: &dyn ModelAdapter,
    tools: &ToolRegistry,
    ctx: TurnContext<'_>,
    max_sentences: u8,
    cancel: &CancellationToken,
) -> Result<DomainTurn> {
    let allowed = explore_tools::allowed_for(domain);
    let system = system_prompt(domain, ctx.recommended_tools);

    let loop_result = tool_loop::run(
        adapter,
        tools,
        &system,
        ctx.history,
        allowed,
        ctx.recommended_tools,
        &ToolLoopConfig::default(),
        cancel,
    )
    .await;

    match loop_result {
        Ok(outcome) => Ok(DomainTurn {
            content: truncate_sentences(&outcome.content, max_sentences),
            tools_used: outcome.tools_used,
        }),
        Err(Error::Cancelled) => Err(Error::Cancelled),
        Err(e) if !ctx.use_ai_model => {
            tracing::warn!(error = %e, "domain agent falling back to scripted response");
            Ok(DomainTurn {
                content: fallback_response(domain, ctx.age),
                tools_used: Vec::new(),
            })
        }
        Err(e) => Err(e),
    }
}

fn system_prompt(domain: DomainAgent, recommended_tools: &[String]) -> String {
    let role = match domain {
        DomainAgent::Science => "一位耐心的科学老师，善于用孩子能懂的语言讲解自然现象",
        DomainAgent::Language => "一位亲切的英语老师，帮助孩子学习单词的发音和用法",
        DomainAgent::Humanities => "一位温和的人文向导，带孩子探索故事、历史与情感",
    };
    if recommended_tools.is_empty() {
        format!("你是{}。请直接用口语化的中文回答。", role)
    } else {
        format!(
            "你是{}。可用工具：{}。需要时调用工具获取准确信息，再用口语化的中文回答。",
            role,
            recommended_tools.join(", ")
        )
    }
}

/// Truncate `text` to at most `max` sentences, where a sentence ends in
/// one of the Chinese or ASCII terminal punctuation marks.
pub fn truncate_sentences(text: &str, max: u8) -> String {
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut count = 0u8;
    for ch in text.chars() {
        out.push(ch);
        if matches!(ch, '。' | '！' | '？' | '!' | '?') {
            count += 1;
            if count >= max {
                break;
            }
        }
    }
    out
}

fn fallback_response(domain: DomainAgent, age: u8) -> String {
    let bucket = if age <= 6 {
        "小"
    } else if age <= 12 {
        "中"
    } else {
        "大"
    };
    match domain {
        DomainAgent::Science => format!("（离线讲解·{}朋友版）这是一个很有趣的自然现象，我们下次联网后再深入聊聊吧。", bucket),
        DomainAgent::Language => format!("（离线讲解·{}朋友版）我们先记住这个词怎么读，之后再学习它的用法。", bucket),
        DomainAgent::Humanities => format!("（离线讲解·{}朋友版）这个话题背后有不少有意思的故事，等联网后我再讲给你听。", bucket),
    }
}
