//! Loading boundary for reconciliation sessions.

use crate::error::ReconciliationError;
use crate::models::{ExternalTransaction, InternalTransaction};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one account and statement period to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRef {
    pub account_id: Uuid,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Supplies the two collections for a session.
///
/// Implemented by the embedding application over its bank feed and ledger
/// queries. Writing the resulting links back stays on that side too.
#[async_trait]
pub trait TransactionSource {
    async fn load_external_transactions(
        &self,
        account: &AccountRef,
    ) -> Result<Vec<ExternalTransaction>, ReconciliationError>;

    async fn load_internal_transactions(
        &self,
        account: &AccountRef,
    ) -> Result<Vec<InternalTransaction>, ReconciliationError>;
}

/// In-memory source backed by pre-built collections, filtered to the
/// requested period on load. Used in tests and for embedding fixtures.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    externals: Vec<ExternalTransaction>,
    internals: Vec<InternalTransaction>,
}

impl FixtureSource {
    pub fn new(
        externals: Vec<ExternalTransaction>,
        internals: Vec<InternalTransaction>,
    ) -> Self {
        Self {
            externals,
            internals,
        }
    }

    /// Parse a fixture from the JSON shape
    /// `{"external": [...], "internal": [...]}`.
    pub fn from_json(raw: &str) -> Result<Self, ReconciliationError> {
        #[derive(Deserialize)]
        struct Fixture {
            external: Vec<ExternalTransaction>,
            internal: Vec<InternalTransaction>,
        }

        let fixture: Fixture = serde_json::from_str(raw)
            .map_err(|e| ReconciliationError::Source(anyhow::anyhow!("invalid fixture: {}", e)))?;

        Ok(Self::new(fixture.external, fixture.internal))
    }
}

#[async_trait]
impl TransactionSource for FixtureSource {
    async fn load_external_transactions(
        &self,
        account: &AccountRef,
    ) -> Result<Vec<ExternalTransaction>, ReconciliationError> {
        Ok(self
            .externals
            .iter()
            .filter(|t| t.date >= account.period_start && t.date <= account.period_end)
            .cloned()
            .collect())
    }

    async fn load_internal_transactions(
        &self,
        account: &AccountRef,
    ) -> Result<Vec<InternalTransaction>, ReconciliationError> {
        Ok(self
            .internals
            .iter()
            .filter(|t| t.date >= account.period_start && t.date <= account.period_end)
            .cloned()
            .collect())
    }
}
