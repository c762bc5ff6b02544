//! Common test utilities for reconciliation-engine integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use reconciliation_engine::config::EngineConfig;
use reconciliation_engine::models::{
    EntryKind, ExternalTransaction, InternalTransaction, MatchState, Polarity,
};
use reconciliation_engine::services::session::ReconciliationSession;
use rust_decimal::Decimal;
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,reconciliation_engine=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn dec(raw: &str) -> Decimal {
    raw.parse().expect("valid decimal literal")
}

pub fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("valid ISO date")
}

/// Unmatched bank-side transaction with a generated id.
pub fn bank_txn(amount: &str, polarity: Polarity, on: &str) -> ExternalTransaction {
    ExternalTransaction {
        id: Uuid::new_v4(),
        date: date(on),
        description: "bank statement line".to_string(),
        reference: None,
        amount: dec(amount),
        polarity,
        state: MatchState::Unmatched,
        notes: None,
    }
}

/// Unmatched ledger-side transaction with a generated id.
pub fn ledger_txn(amount: &str, kind: EntryKind, on: &str) -> InternalTransaction {
    InternalTransaction {
        id: Uuid::new_v4(),
        date: date(on),
        description: "ledger entry".to_string(),
        category: "general".to_string(),
        reference: None,
        amount: dec(amount),
        kind,
        state: MatchState::Unmatched,
        owner_scope: "main-branch".to_string(),
    }
}

/// Session over the given collections with the default 3-day window.
pub fn session(
    externals: Vec<ExternalTransaction>,
    internals: Vec<InternalTransaction>,
) -> ReconciliationSession {
    init_tracing();
    ReconciliationSession::new(EngineConfig::default(), externals, internals)
        .expect("valid session collections")
}
