// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{FlakyStore, MemoryStore};
use pgr_core::{ActionType, PlaygroundId};
use serde_json::json;

fn tables(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

async fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .append(PlaygroundId(1), ActionType::CreateAccount, json!({}))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn clear_records_exactly_one_marker() {
    let store = seeded().await;
    let control = ClearControl::new(store.clone());

    let marker = control
        .clear(&tables(&["actions", "balances"]), 4)
        .await
        .unwrap();

    assert_eq!(marker.version, 4);
    assert_eq!(marker.tables_cleared, tables(&["actions"]));
    assert_eq!(store.clear_markers().await.unwrap(), vec![marker]);
    assert!(store.is_empty());
}

#[tokio::test]
async fn failed_clear_still_records_marker() {
    let store = FlakyStore::new(seeded().await);
    store.fail_clears(true);
    let control = ClearControl::new(store.clone());

    let err = control.clear(&tables(&["actions"]), 2).await.unwrap_err();
    let ClearError::Partial { marker, .. } = err else {
        panic!("expected partial clear");
    };

    // Nothing was actually cleared, and the marker says so
    assert!(marker.tables_cleared.is_empty());
    assert_eq!(store.inner().clear_markers().await.unwrap().len(), 1);
    assert_eq!(store.inner().len(), 1);
}

#[tokio::test]
async fn marker_failure_is_reported() {
    let store = FlakyStore::new(seeded().await);
    store.fail_markers(true);
    let control = ClearControl::new(store);

    let err = control.clear(&tables(&["actions"]), 1).await.unwrap_err();
    assert!(matches!(err, ClearError::Marker(_)));
}

#[tokio::test]
async fn latest_returns_newest_marker() {
    let store = MemoryStore::new();
    let control = ClearControl::new(store);
    assert!(control.latest().await.unwrap().is_none());

    control.record_clear(&tables(&["actions"]), 1).await.unwrap();
    control.record_clear(&tables(&["actions"]), 2).await.unwrap();
    assert_eq!(control.latest().await.unwrap().unwrap().version, 2);
}

#[tokio::test]
async fn reset_if_stale_stamps_empty_log() {
    let store = MemoryStore::new();
    let control = ClearControl::new(store.clone());

    let outcome = control
        .reset_if_stale(1, &tables(&["actions"]))
        .await
        .unwrap();
    assert!(matches!(outcome, ResetOutcome::Stamped(ref m) if m.tables_cleared.is_empty()));

    let again = control
        .reset_if_stale(1, &tables(&["actions"]))
        .await
        .unwrap();
    assert_eq!(again, ResetOutcome::Current);
    assert_eq!(store.clear_markers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reset_if_stale_keeps_current_log() {
    let store = seeded().await;
    let control = ClearControl::new(store.clone());
    control.record_clear(&tables(&[]), 3).await.unwrap();

    let outcome = control
        .reset_if_stale(3, &tables(&["actions"]))
        .await
        .unwrap();
    assert_eq!(outcome, ResetOutcome::Current);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn reset_if_stale_clears_older_version() {
    let store = seeded().await;
    let control = ClearControl::new(store.clone());
    control.record_clear(&tables(&[]), 1).await.unwrap();

    let outcome = control
        .reset_if_stale(2, &tables(&["actions"]))
        .await
        .unwrap();
    let ResetOutcome::Reset(marker) = outcome else {
        panic!("expected reset");
    };
    assert_eq!(marker.version, 2);
    assert!(marker.cleared("actions"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn reset_if_stale_clears_unversioned_log() {
    let store = seeded().await;
    let control = ClearControl::new(store.clone());

    let outcome = control
        .reset_if_stale(1, &tables(&["actions"]))
        .await
        .unwrap();
    assert!(matches!(outcome, ResetOutcome::Reset(_)));
    assert!(store.is_empty());
}
