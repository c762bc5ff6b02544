//! In-memory reconciliation session store.

use crate::config::EngineConfig;
use crate::error::{ReconciliationError, Side};
use crate::models::{ExternalTransaction, InternalTransaction, MatchState};
use crate::services::matching;
use crate::services::summary::{summarize, ReconciliationSummary};
use crate::sources::{AccountRef, TransactionSource};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{info, instrument};
use uuid::Uuid;

/// One loaded working set of external + internal transactions for a single
/// account and period.
///
/// The session is the only writer to its collections, and every match or
/// unmatch updates both sides in one call, so a mutual link is never
/// half-written. Persisting the resulting links is the caller's job.
#[derive(Debug, Clone)]
pub struct ReconciliationSession {
    config: EngineConfig,
    externals: Vec<ExternalTransaction>,
    internals: Vec<InternalTransaction>,
    external_index: HashMap<Uuid, usize>,
    internal_index: HashMap<Uuid, usize>,
}

impl ReconciliationSession {
    /// Build a session over freshly loaded collections.
    ///
    /// Rejects duplicate ids and negative amounts; every invariant the
    /// session maintains assumes unique ids and non-negative magnitudes.
    pub fn new(
        config: EngineConfig,
        externals: Vec<ExternalTransaction>,
        internals: Vec<InternalTransaction>,
    ) -> Result<Self, ReconciliationError> {
        config.validate()?;
        let external_index =
            build_index(&externals, Side::External, |t| (t.id, t.amount))?;
        let internal_index =
            build_index(&internals, Side::Internal, |t| (t.id, t.amount))?;

        Ok(Self {
            config,
            externals,
            internals,
            external_index,
            internal_index,
        })
    }

    /// Load both collections from a source and build the session.
    #[instrument(skip_all, fields(account_id = %account.account_id))]
    pub async fn load<S>(
        config: EngineConfig,
        source: &S,
        account: &AccountRef,
    ) -> Result<Self, ReconciliationError>
    where
        S: TransactionSource + ?Sized,
    {
        let externals = source.load_external_transactions(account).await?;
        let internals = source.load_internal_transactions(account).await?;

        info!(
            external_count = externals.len(),
            internal_count = internals.len(),
            "reconciliation session loaded"
        );

        Self::new(config, externals, internals)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn externals(&self) -> &[ExternalTransaction] {
        &self.externals
    }

    pub fn internals(&self) -> &[InternalTransaction] {
        &self.internals
    }

    pub fn external(&self, id: Uuid) -> Option<&ExternalTransaction> {
        self.external_index.get(&id).map(|&pos| &self.externals[pos])
    }

    pub fn internal(&self, id: Uuid) -> Option<&InternalTransaction> {
        self.internal_index.get(&id).map(|&pos| &self.internals[pos])
    }

    /// External transactions still awaiting a match, in collection order.
    pub fn unmatched_externals(&self) -> Vec<&ExternalTransaction> {
        self.externals
            .iter()
            .filter(|t| !t.state.is_matched())
            .collect()
    }

    /// Candidate internal transactions for one external transaction, in
    /// collection order. Already-matched externals get an empty list.
    pub fn find_candidates(
        &self,
        external_id: Uuid,
    ) -> Result<Vec<&InternalTransaction>, ReconciliationError> {
        let external = self.require_external(external_id)?;
        Ok(matching::find_candidates(
            external,
            &self.internals,
            &self.config,
        ))
    }

    /// Candidates ordered by date proximity, closest first.
    pub fn rank_candidates(
        &self,
        external_id: Uuid,
    ) -> Result<Vec<&InternalTransaction>, ReconciliationError> {
        let external = self.require_external(external_id)?;
        Ok(matching::rank_candidates(
            external,
            &self.internals,
            &self.config,
        ))
    }

    /// Link one external transaction to one internal transaction.
    ///
    /// Re-linking an existing pair is a no-op. Linking either side to a new
    /// partner while it is still matched fails with `AlreadyMatched`, which
    /// would otherwise strand the old partner's half of the link.
    #[instrument(skip(self), fields(external_id = %external_id, internal_id = %internal_id))]
    pub fn match_pair(
        &mut self,
        external_id: Uuid,
        internal_id: Uuid,
    ) -> Result<(), ReconciliationError> {
        let e_pos = self.external_pos(external_id)?;
        let i_pos = self.internal_pos(internal_id)?;

        let external_state = self.externals[e_pos].state;
        let internal_state = self.internals[i_pos].state;

        if external_state.partner_id() == Some(internal_id)
            && internal_state.partner_id() == Some(external_id)
        {
            return Ok(());
        }

        if let MatchState::Matched { partner_id } = external_state {
            return Err(ReconciliationError::AlreadyMatched {
                side: Side::External,
                id: external_id,
                partner_id,
            });
        }
        if let MatchState::Matched { partner_id } = internal_state {
            return Err(ReconciliationError::AlreadyMatched {
                side: Side::Internal,
                id: internal_id,
                partner_id,
            });
        }

        self.externals[e_pos].state = MatchState::Matched {
            partner_id: internal_id,
        };
        self.internals[i_pos].state = MatchState::Matched {
            partner_id: external_id,
        };

        info!("transactions matched");

        Ok(())
    }

    /// Remove the link between a specific pair.
    ///
    /// The two records must be matched to each other; clearing by id alone
    /// could silently desynchronize an unrelated pair.
    #[instrument(skip(self), fields(external_id = %external_id, internal_id = %internal_id))]
    pub fn unmatch_pair(
        &mut self,
        external_id: Uuid,
        internal_id: Uuid,
    ) -> Result<(), ReconciliationError> {
        let e_pos = self.external_pos(external_id)?;
        let i_pos = self.internal_pos(internal_id)?;

        let linked = self.externals[e_pos].state.partner_id() == Some(internal_id)
            && self.internals[i_pos].state.partner_id() == Some(external_id);
        if !linked {
            return Err(ReconciliationError::MismatchedPair {
                external_id,
                internal_id,
            });
        }

        self.externals[e_pos].state = MatchState::Unmatched;
        self.internals[i_pos].state = MatchState::Unmatched;

        info!("transactions unmatched");

        Ok(())
    }

    /// Overwrite the free-text note on an external transaction. Empty text
    /// clears it. Notes survive match and unmatch.
    pub fn set_note(&mut self, external_id: Uuid, note: &str) -> Result<(), ReconciliationError> {
        let pos = self.external_pos(external_id)?;
        self.externals[pos].notes = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        Ok(())
    }

    /// Aggregate reconciliation status over the external collection.
    pub fn summarize(&self) -> ReconciliationSummary {
        summarize(&self.externals)
    }

    fn external_pos(&self, id: Uuid) -> Result<usize, ReconciliationError> {
        self.external_index
            .get(&id)
            .copied()
            .ok_or(ReconciliationError::NotFound {
                side: Side::External,
                id,
            })
    }

    fn internal_pos(&self, id: Uuid) -> Result<usize, ReconciliationError> {
        self.internal_index
            .get(&id)
            .copied()
            .ok_or(ReconciliationError::NotFound {
                side: Side::Internal,
                id,
            })
    }

    fn require_external(&self, id: Uuid) -> Result<&ExternalTransaction, ReconciliationError> {
        self.external_pos(id).map(|pos| &self.externals[pos])
    }
}

fn build_index<T>(
    items: &[T],
    side: Side,
    key: impl Fn(&T) -> (Uuid, Decimal),
) -> Result<HashMap<Uuid, usize>, ReconciliationError> {
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let (id, amount) = key(item);
        if amount.is_sign_negative() {
            return Err(ReconciliationError::InvalidAmount { side, id, amount });
        }
        if index.insert(id, pos).is_some() {
            return Err(ReconciliationError::DuplicateId { side, id });
        }
    }
    Ok(index)
}
