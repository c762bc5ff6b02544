//! Reconciliation Matching Engine - links bank statement transactions to ledger entries.
//!
//! The engine holds one reconciliation session in memory: the external
//! (bank-side) and internal (ledger-side) collections for a single account
//! and period. It finds match candidates, links and unlinks pairs while
//! keeping both sides consistent, aggregates reconciliation status, and
//! carries free-text annotations. Loading the collections and persisting
//! the resulting links belong to the embedding application.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod sources;
