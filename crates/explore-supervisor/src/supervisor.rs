//! Runs the three supervisor sub-agents in sequence and records their
//! results on the turn's `SupervisorState`, the way the Go orchestrator's
//! graph nodes write into its shared state object.

use crate::{cognitive_load, intent, planner};
use explore_core::{PlannerDecision, SupervisorState};
use explore_llm::ModelAdapter;

pub struct Supervisor<'a> {
    pub adapter: Option<&'a dyn ModelAdapter>,
    pub use_ai_model: bool,
}

impl<'a> Supervisor<'a> {
    pub fn new(adapter: Option<&'a dyn ModelAdapter>, use_ai_model: bool) -> Self {
        Self {
            adapter,
            use_ai_model,
        }
    }

    /// Run Intent → Cognitive-Load → Planner for this turn's `message`,
    /// writing each stage's result into `state.agent_results` and
    /// returning the planner's decision.
    pub async fn run(&self, state: &mut SupervisorState, message: &str) -> PlannerDecision {
        let intent_result = intent::assess(self.adapter, self.use_ai_model, message).await;
        state.agent_results.insert(
            "intent".to_string(),
            serde_json::to_value(&intent_result).unwrap_or_default(),
        );

        let load_advice = cognitive_load::assess(self.adapter, self.use_ai_model, state).await;
        state.agent_results.insert(
            "cognitiveLoad".to_string(),
            serde_json::to_value(&load_advice).unwrap_or_default(),
        );

        let decision = planner::plan(
            intent_result.intent,
            intent_result.confidence,
            load_advice.strategy,
            message,
        );
        state.agent_results.insert(
            "learningPlan".to_string(),
            serde_json::to_value(&decision).unwrap_or_default(),
        );

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::DomainAgent;

    #[tokio::test]
    async fn run_without_adapter_uses_rule_based_pipeline_end_to_end() {
        let supervisor = Supervisor::new(None, false);
        let mut state = SupervisorState {
            user_age: 8,
            ..Default::default()
        };
        let decision = supervisor.run(&mut state, "为什么会下雨").await;
        assert_eq!(decision.domain_agent, DomainAgent::Science);
        assert!(state.agent_results.contains_key("intent"));
        assert!(state.agent_results.contains_key("cognitiveLoad"));
        assert!(state.agent_results.contains_key("learningPlan"));
    }
}
