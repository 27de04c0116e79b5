//! Routes intent + cognitive-load strategy to a domain agent and an action,
//! then attaches the recommended tool list.

use crate::tool_strategy::{select_tool_strategy, select_tools};
use explore_core::{Action, DomainAgent, Intent, PlannerDecision, Strategy};

fn route_domain(intent: Intent) -> DomainAgent {
    match intent {
        Intent::Causal => DomainAgent::Science,
        Intent::Expressive => DomainAgent::Language,
        Intent::Playful | Intent::Emotional => DomainAgent::Humanities,
        Intent::Cognitive => DomainAgent::Science,
    }
}

fn route_action(strategy: Strategy) -> Action {
    match strategy {
        Strategy::Socratic | Strategy::Pause => Action::AskQuestion,
        _ => Action::TellSomething,
    }
}

pub fn plan(
    intent: Intent,
    confidence: f32,
    strategy: Strategy,
    message: &str,
) -> PlannerDecision {
    let domain_agent = route_domain(intent);
    let action = route_action(strategy);
    let tool_strategy = select_tool_strategy(confidence, message);
    let tools = select_tools(tool_strategy, intent, domain_agent, message);
    PlannerDecision {
        continue_: true,
        domain_agent,
        action,
        tools,
        tool_strategy,
    }
}
