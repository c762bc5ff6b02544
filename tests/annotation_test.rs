//! Integration tests for transaction annotations.

mod common;

use common::{bank_txn, ledger_txn, session};
use reconciliation_engine::error::{ReconciliationError, Side};
use reconciliation_engine::models::{EntryKind, Polarity};
use uuid::Uuid;

#[test]
fn set_note_stores_text() {
    let external = bank_txn("500.00", Polarity::Credit, "2025-04-08");
    let mut sess = session(vec![external.clone()], vec![]);

    sess.set_note(external.id, "looks like the April pledge drive")
        .unwrap();

    assert_eq!(
        sess.external(external.id).unwrap().notes.as_deref(),
        Some("looks like the April pledge drive")
    );
}

#[test]
fn set_note_overwrites_existing_text() {
    let external = bank_txn("500.00", Polarity::Credit, "2025-04-08");
    let mut sess = session(vec![external.clone()], vec![]);

    sess.set_note(external.id, "first draft").unwrap();
    sess.set_note(external.id, "confirmed with the bank").unwrap();

    assert_eq!(
        sess.external(external.id).unwrap().notes.as_deref(),
        Some("confirmed with the bank")
    );
}

#[test]
fn empty_note_clears_annotation() {
    let external = bank_txn("500.00", Polarity::Credit, "2025-04-08");
    let mut sess = session(vec![external.clone()], vec![]);

    sess.set_note(external.id, "temporary").unwrap();
    sess.set_note(external.id, "").unwrap();

    assert_eq!(sess.external(external.id).unwrap().notes, None);
}

#[test]
fn set_note_on_unknown_transaction_fails() {
    let mut sess = session(vec![], vec![]);

    let result = sess.set_note(Uuid::new_v4(), "orphan note");

    assert!(matches!(
        result,
        Err(ReconciliationError::NotFound {
            side: Side::External,
            ..
        })
    ));
}

#[test]
fn note_survives_match_and_unmatch() {
    let external = bank_txn("500.00", Polarity::Credit, "2025-04-08");
    let internal = ledger_txn("500.00", EntryKind::Income, "2025-04-08");
    let mut sess = session(vec![external.clone()], vec![internal.clone()]);

    sess.set_note(external.id, "verify against deposit slip")
        .unwrap();

    sess.match_pair(external.id, internal.id).unwrap();
    assert_eq!(
        sess.external(external.id).unwrap().notes.as_deref(),
        Some("verify against deposit slip")
    );

    sess.unmatch_pair(external.id, internal.id).unwrap();
    assert_eq!(
        sess.external(external.id).unwrap().notes.as_deref(),
        Some("verify against deposit slip")
    );
}
