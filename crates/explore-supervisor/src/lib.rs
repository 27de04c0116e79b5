//! The supervisor pipeline: Intent classification, cognitive-load
//! assessment, and planning, each rule-based with an optional LLM
//! refinement pass, run in sequence ahead of a domain agent's turn.

pub mod cognitive_load;
pub mod intent;
pub mod json_extract;
pub mod planner;
pub mod supervisor;
pub mod tool_strategy;

pub use supervisor::Supervisor;
