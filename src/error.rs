use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Which side of a reconciliation session an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    External,
    Internal,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ReconciliationError {
    #[error("{side} transaction {id} not found")]
    NotFound { side: Side, id: Uuid },

    #[error("{side} transaction {id} is already matched to {partner_id}")]
    AlreadyMatched {
        side: Side,
        id: Uuid,
        partner_id: Uuid,
    },

    #[error("transactions {external_id} and {internal_id} are not matched to each other")]
    MismatchedPair {
        external_id: Uuid,
        internal_id: Uuid,
    },

    #[error("duplicate {side} transaction id {id}")]
    DuplicateId { side: Side, id: Uuid },

    #[error("{side} transaction {id} has negative amount {amount}")]
    InvalidAmount {
        side: Side,
        id: Uuid,
        amount: Decimal,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("source error: {0}")]
    Source(#[from] anyhow::Error),
}
