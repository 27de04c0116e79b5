//! Model adapter seam: a narrow `generate`/`stream` contract plus a
//! scripted mock and a thin Anthropic-shaped HTTP implementation.

pub mod adapter;
pub mod anthropic;
pub mod mock;
pub mod types;

pub use adapter::{AdapterError, AdapterResult, ModelAdapter, ModelStream};
pub use anthropic::AnthropicAdapter;
pub use mock::MockAdapter;
pub use types::*;
