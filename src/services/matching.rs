//! Match candidate finding.

use crate::config::EngineConfig;
use crate::models::{ExternalTransaction, InternalTransaction};
use tracing::debug;

/// Returns the internal transactions eligible to match `external`.
///
/// A candidate must be unmatched, carry exactly the same magnitude (decimal
/// equality, no rounding tolerance), pair credit with income or debit with
/// expense, and fall within the configured date window. Output preserves
/// the order of `internals`, so a fixed input always yields the same list.
///
/// An already-matched `external` yields an empty list: stale callers are
/// expected and recoverable, not a failure.
pub fn find_candidates<'a>(
    external: &ExternalTransaction,
    internals: &'a [InternalTransaction],
    config: &EngineConfig,
) -> Vec<&'a InternalTransaction> {
    if external.state.is_matched() {
        debug!(external_id = %external.id, "candidate lookup on matched transaction");
        return Vec::new();
    }

    let candidates: Vec<&InternalTransaction> = internals
        .iter()
        .filter(|i| !i.state.is_matched())
        .filter(|i| i.amount == external.amount)
        .filter(|i| external.polarity.matches_kind(i.kind))
        .filter(|i| (i.date - external.date).num_days().abs() <= config.date_window_days)
        .collect();

    debug!(
        external_id = %external.id,
        count = candidates.len(),
        "candidate lookup complete"
    );

    candidates
}

/// Same filter as [`find_candidates`], ordered by date proximity with the
/// closest entries first. Ties keep collection order.
pub fn rank_candidates<'a>(
    external: &ExternalTransaction,
    internals: &'a [InternalTransaction],
    config: &EngineConfig,
) -> Vec<&'a InternalTransaction> {
    let mut candidates = find_candidates(external, internals, config);
    candidates.sort_by_key(|i| (i.date - external.date).num_days().abs());
    candidates
}
