//! Three-card fan-out generator: science, poetry, and english cards for a
//! recognized object, each produced independently with its own deadline
//! and a deterministic per-object fallback.

pub mod fallback;
pub mod generator;
pub mod streaming;
pub mod types;

pub use generator::generate;
pub use streaming::{generate_stream, CardEvent};
pub use types::{Card, CardRequest, CardType, CardsResponse};
