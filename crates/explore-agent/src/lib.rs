//! Per-session state and the turn machinery shared by every domain agent:
//! the bounded tool-call loop, the three domain agents themselves, and the
//! rule-based interaction/reflection/memory layer that wraps their output.

pub mod domain_agent;
pub mod interaction;
pub mod memory;
pub mod reflection;
pub mod session;
pub mod tool_loop;

pub use domain_agent::{run_domain_agent, truncate_sentences, DomainTurn, TurnContext};
pub use interaction::{
    append_ending, EndingPicker, FixedEndingPicker, InteractionOptimization, RandomEndingPicker,
};
pub use reflection::ReflectionSignal;
pub use session::{Session, SessionStore, MAX_LOG_LEN};
pub use tool_loop::{ToolLoopConfig, ToolLoopOutcome};
