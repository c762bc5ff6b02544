//! Domain models for the reconciliation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Match State
// ============================================================================

/// Whether a transaction participates in a match.
///
/// The partner id only exists inside the `Matched` variant, so a matched
/// record without a partner (or the reverse) is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchState {
    #[default]
    Unmatched,
    Matched {
        partner_id: Uuid,
    },
}

impl MatchState {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn partner_id(&self) -> Option<Uuid> {
        match self {
            Self::Matched { partner_id } => Some(*partner_id),
            Self::Unmatched => None,
        }
    }
}

// ============================================================================
// Direction Indicators
// ============================================================================

/// Sign indicator of a bank-side line; the stored amount is always a
/// non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Credit,
    Debit,
}

impl Polarity {
    /// Credit lines pair with income entries, debit lines with expenses.
    pub fn matches_kind(&self, kind: EntryKind) -> bool {
        matches!(
            (self, kind),
            (Self::Credit, EntryKind::Income) | (Self::Debit, EntryKind::Expense)
        )
    }
}

/// Direction of a ledger-side entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

// ============================================================================
// Transaction Models
// ============================================================================

/// A record originating from a bank statement feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Non-negative magnitude; direction is carried by `polarity`.
    pub amount: Decimal,
    pub polarity: Polarity,
    #[serde(default)]
    pub state: MatchState,
    /// Free-text annotation, independent of the match lifecycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExternalTransaction {
    /// Amount with its sign applied: credits are inflows, debits outflows.
    pub fn signed_amount(&self) -> Decimal {
        match self.polarity {
            Polarity::Credit => self.amount,
            Polarity::Debit => -self.amount,
        }
    }
}

/// A record originating from the organization's own ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Non-negative magnitude; direction is carried by `kind`.
    pub amount: Decimal,
    pub kind: EntryKind,
    #[serde(default)]
    pub state: MatchState,
    /// Owning organizational unit. Informational only.
    pub owner_scope: String,
}

impl InternalTransaction {
    /// Amount with its sign applied: income is an inflow, expense an outflow.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}
