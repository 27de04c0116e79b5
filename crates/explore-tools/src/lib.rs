//! explore-tools — the Tool trait, registry, and the five built-in tools,
//! plus the per-domain-agent allow lists the tool-call loop consults.
//!
//! Each tool is a self-contained file in src/tools/. To add a tool: create
//! the file, implement the Tool trait, register it below, and decide which
//! agents' allow lists it belongs to.

pub mod registry;
pub mod tools;

pub use registry::{Tool, ToolRegistry, ToolResult};

use explore_core::DomainAgent;

/// Register every built-in tool.
pub fn create_default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(tools::clock::ClockTool::new());
    registry.register(tools::fact_lookup::FactLookupTool);
    registry.register(tools::dictionary::DictionaryTool);
    registry.register(tools::pronunciation::PronunciationTool);
    registry.register(tools::image_gen::ImageGenTool);
    registry
}

/// The tools a given domain agent is ever permitted to call, regardless of
/// what the planner recommends for a turn. Mirrors the teacher's
/// `create_policy_registry` allow-list filtering, narrowed from "which
/// tools get registered" to "which registered tools this agent may call".
pub fn allowed_for(agent: DomainAgent) -> &'static [&'static str] {
    match agent {
        DomainAgent::Science => &[
            "get_current_time",
            "simple_fact_lookup",
            "image_generate_simple",
        ],
        DomainAgent::Language => &[
            "get_current_time",
            "simple_dictionary",
            "pronunciation_hint",
        ],
        DomainAgent::Humanities => &["get_current_time", "image_generate_simple"],
    }
}
