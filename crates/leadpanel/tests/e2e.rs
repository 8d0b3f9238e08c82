// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the dashboard over the real SQLite
//! store.
//!
//! Each test creates an isolated TestHarness with a temp database, seeds
//! leads, and drives the controller the way the CLI does. Tests are
//! independent and order-insensitive.

use chrono::{TimeDelta, Utc};
use leadpanel_core::Lead;
use leadpanel_dashboard::{LeadListController, ToggleOutcome};
use leadpanel_storage::queries;
use leadpanel_test_utils::{TestHarness, fixtures};

/// 20 leads with staggered creation times; the first `zero_follow_ups`
/// have no follow-up attempts yet.
fn seeded_leads(total: usize, zero_follow_ups: usize) -> Vec<Lead> {
    let now = Utc::now();
    (0..total)
        .map(|i| {
            let mut lead = fixtures::lead_created_at(
                i as i64 + 1,
                now - TimeDelta::minutes(i as i64),
            );
            lead.follow_up_count = if i < zero_follow_ups { 0 } else { 1 + (i % 2) as u32 };
            lead
        })
        .collect()
}

// ---- Filter + pagination through the real store ----

#[tokio::test]
async fn follow_up_filter_and_pagination_over_twenty_leads() {
    let mut harness = TestHarness::builder()
        .with_leads(seeded_leads(20, 3))
        .build()
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    assert_eq!(harness.controller.snapshot_len(), 20);

    harness.controller.set_filter(true);
    assert_eq!(harness.controller.total_count(), 17);
    assert_eq!(harness.controller.total_pages(), 2);

    harness.controller.set_page(2);
    assert_eq!(harness.controller.page_items().len(), 2);
}

#[tokio::test]
async fn empty_store_still_has_one_page() {
    let mut harness = TestHarness::builder().build().await.unwrap();

    harness.controller.load().await.unwrap();
    assert_eq!(harness.controller.snapshot_len(), 0);
    assert_eq!(harness.controller.total_pages(), 1);
    assert!(harness.controller.page_items().is_empty());
}

// ---- Store-confirmed toggles ----

#[tokio::test]
async fn confirmed_toggle_persists_across_a_reload() {
    let mut harness = TestHarness::builder()
        .with_leads(seeded_leads(5, 0))
        .build()
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    let outcome = harness.controller.toggle_automation(3).await;
    assert_eq!(outcome, ToggleOutcome::Applied { paused: true });

    // A fresh controller over the same store sees the persisted value.
    let mut fresh = LeadListController::new(harness.store.clone());
    fresh.load().await.unwrap();
    let lead = fresh
        .page_items()
        .into_iter()
        .find(|l| l.id == 3)
        .expect("lead 3 should be in the snapshot");
    assert!(lead.automation_paused);
}

#[tokio::test]
async fn toggle_twice_returns_to_the_original_status() {
    let mut harness = TestHarness::builder()
        .with_leads(seeded_leads(3, 0))
        .build()
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    assert_eq!(
        harness.controller.toggle_automation(2).await,
        ToggleOutcome::Applied { paused: true }
    );
    assert_eq!(
        harness.controller.toggle_automation(2).await,
        ToggleOutcome::Applied { paused: false }
    );

    let stored = queries::leads::get_lead(harness.store.database(), 2)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.automation_paused);
}

#[tokio::test]
async fn unknown_toggle_id_touches_nothing() {
    let mut harness = TestHarness::builder()
        .with_leads(seeded_leads(4, 0))
        .build()
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    let before = harness.controller.page_items();

    assert_eq!(
        harness.controller.toggle_automation(999).await,
        ToggleOutcome::UnknownId
    );
    assert_eq!(harness.controller.page_items(), before);
    assert_eq!(
        queries::leads::count_leads(harness.store.database())
            .await
            .unwrap(),
        4
    );
}

// ---- Staleness over blankness ----

#[tokio::test]
async fn emptied_store_does_not_blank_a_loaded_view() {
    let mut harness = TestHarness::builder()
        .with_leads(seeded_leads(5, 0))
        .build()
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    assert_eq!(harness.controller.snapshot_len(), 5);

    // The pipeline wipes the table between refreshes.
    harness
        .store
        .database()
        .connection()
        .call(|conn| {
            conn.execute("DELETE FROM leads", [])?;
            Ok::<(), tokio_rusqlite::Error>(())
        })
        .await
        .unwrap();

    harness.controller.load().await.unwrap();
    assert_eq!(
        harness.controller.snapshot_len(),
        5,
        "the held snapshot must survive an empty fetch"
    );

    // A controller that never had data shows the truth.
    let mut fresh = LeadListController::new(harness.store.clone());
    fresh.load().await.unwrap();
    assert_eq!(fresh.snapshot_len(), 0);
}

// ---- Metrics over the stored snapshot ----

#[tokio::test]
async fn overview_metrics_reflect_the_stored_leads() {
    let now = Utc::now();
    let mut leads = vec![
        fixtures::lead_created_at(1, now - TimeDelta::days(1)),
        fixtures::lead_created_at(2, now - TimeDelta::days(10)),
        fixtures::lead_created_at(3, now - TimeDelta::days(3)),
    ];
    leads[0].interested = true;
    leads[2].automation_paused = true;

    let mut harness = TestHarness::builder()
        .with_leads(leads)
        .build()
        .await
        .unwrap();
    harness.controller.load().await.unwrap();

    let metrics = harness.controller.metrics();
    assert_eq!(metrics.total_leads, 3);
    assert_eq!(metrics.interested_leads, 1);
    assert_eq!(metrics.new_last_7_days, 2);
    assert_eq!(metrics.paused_conversations, 1);
}
