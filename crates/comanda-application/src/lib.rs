//! Application layer: the per-turn dialogue orchestrator and reporting.

pub mod reporting;
pub mod session;

pub use session::OrderSession;
