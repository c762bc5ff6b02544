//! Reconciliation status aggregation.

use crate::models::ExternalTransaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate reconciliation status over the external collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationSummary {
    pub total_count: usize,
    pub matched_count: usize,
    pub unmatched_count: usize,
    pub total_signed_amount: Decimal,
    pub matched_signed_amount: Decimal,
    pub unmatched_signed_amount: Decimal,
}

/// Recomputes the summary from scratch on every call. Collections are
/// session-sized, not ledger history, so a full pass beats incremental
/// bookkeeping.
pub fn summarize(externals: &[ExternalTransaction]) -> ReconciliationSummary {
    let mut matched_count = 0;
    let mut total_signed = Decimal::ZERO;
    let mut matched_signed = Decimal::ZERO;

    for txn in externals {
        let signed = txn.signed_amount();
        total_signed += signed;
        if txn.state.is_matched() {
            matched_count += 1;
            matched_signed += signed;
        }
    }

    ReconciliationSummary {
        total_count: externals.len(),
        matched_count,
        unmatched_count: externals.len() - matched_count,
        total_signed_amount: total_signed,
        matched_signed_amount: matched_signed,
        unmatched_signed_amount: total_signed - matched_signed,
    }
}
