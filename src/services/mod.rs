//! Services module for the reconciliation engine.

pub mod matching;
pub mod session;
pub mod summary;

pub use matching::{find_candidates, rank_candidates};
pub use session::ReconciliationSession;
pub use summary::{summarize, ReconciliationSummary};
