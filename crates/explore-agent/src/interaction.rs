//! Appends a short closing prompt to a domain agent's answer, inviting the
//! child to keep going. Prefers asking the model for one in the agent's
//! voice; falls back to a fixed rule-based pick when the model call fails
//! or doesn't land on one of the three recognized endings.

use explore_llm::{GenerateRequest, ModelAdapter};
use rand::seq::SliceRandom;

const ENDINGS: &[&str] = &["你想不想试试？", "我们下一步看什么？", "要不要换个角度？"];

/// Result of one interaction-optimization pass: the content to show and
/// which of the three recognized endings (if any) it landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionOptimization {
    pub optimized_content: String,
    pub ending_action: &'static str,
}

fn find_recognized_ending(text: &str) -> Option<&'static str> {
    ENDINGS.iter().copied().find(|ending| text.contains(ending))
}

/// Picks a closing line. Production code uses `RandomEndingPicker`; tests
/// use a fixed picker so assertions aren't probabilistic.
pub trait EndingPicker: Send + Sync {
    fn pick(&self) -> &'static str;
}

pub struct RandomEndingPicker;

impl EndingPicker for RandomEndingPicker {
    fn pick(&self) -> &'static str {
        ENDINGS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(ENDINGS[0])
    }
}

pub struct FixedEndingPicker(pub &'static str);

impl EndingPicker for FixedEndingPicker {
    fn pick(&self) -> &'static str {
        self.0
    }
}

fn rule_based_ending(content: &str, picker: &dyn EndingPicker) -> InteractionOptimization {
    let ending = picker.pick();
    let optimized_content = if content.trim_end().ends_with(['?', '？']) {
        content.to_string()
    } else {
        format!("{} {}", content, ending)
    };
    InteractionOptimization {
        optimized_content,
        ending_action: ending,
    }
}

/// Append a closing line to `content`. Tries the model for a line in the
/// agent's own voice; the result only counts if it lands on one of the
/// three recognized endings, otherwise this falls back to the rule-based
/// picker.
pub async fn append_ending(
    adapter: &dyn ModelAdapter,
    content: &str,
    picker: &dyn EndingPicker,
) -> InteractionOptimization {
    let prompt = format!(
        "刚才对孩子说了：“{}”。请用不超过12个字的一句话，邀请孩子继续提问或继续聊，不要重复前面的内容。",
        content
    );
    let request = GenerateRequest::new(vec![]).with_system(&prompt);
    if let Ok(reply) = adapter.generate(request).await {
        let text = reply.content.trim();
        if !text.is_empty() {
            let optimized_content = format!("{} {}", content, text);
            if let Some(ending_action) = find_recognized_ending(&optimized_content) {
                return InteractionOptimization {
                    optimized_content,
                    ending_action,
                };
            }
        }
    }
    rule_based_ending(content, picker)
}
