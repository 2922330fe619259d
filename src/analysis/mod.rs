//! Restriction analysis.
//!
//! Pure rule evaluation: `(vehicle, restrictions, time) → alerts`. No I/O,
//! no shared state, no failure modes.

pub mod engine;
pub mod types;

pub use engine::evaluate;
pub use types::{Alert, EvaluationTime};
