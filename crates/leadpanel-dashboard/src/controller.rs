// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lead list controller: owns the in-memory snapshot and applies
//! operator intents against it.
//!
//! The controller is a single-owner state machine. The presentation layer
//! injects a store, issues intents (`load`, `set_filter`, `set_page`,
//! `toggle_automation`), and polls the derived-view accessors after each
//! one; it never touches the state directly. The only suspension points
//! are the two store calls -- everything else is synchronous.
//!
//! Status toggles are pessimistic-confirm: the snapshot reflects a new
//! automation status only after the store reports a durable write. A
//! denied or crashed mutation leaves the displayed state exactly as the
//! store last confirmed it.

use std::sync::Arc;

use leadpanel_core::{Lead, LeadStore, LeadpanelError};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::metrics::{self, LeadMetrics};
use crate::view;

/// Result of a [`LeadListController::toggle_automation`] intent, phrased
/// for the presentation layer's notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleOutcome {
    /// The store confirmed the write; the snapshot now shows `paused`.
    Applied { paused: bool },
    /// The store declined or failed the write; nothing changed.
    Denied,
    /// No lead with that id in the current snapshot; nothing happened.
    /// A stale view, not a fault -- the core does not escalate it.
    UnknownId,
}

/// Owns the lead snapshot, the follow-up filter, the current page, and
/// the in-flight loading flag.
pub struct LeadListController {
    store: Arc<dyn LeadStore>,
    leads: Vec<Lead>,
    filter_active: bool,
    current_page: usize,
    loading: bool,
}

impl LeadListController {
    /// Creates a controller with an empty snapshot on page 1.
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self {
            store,
            leads: Vec::new(),
            filter_active: false,
            current_page: 1,
            loading: false,
        }
    }

    /// Refreshes the snapshot from the store.
    ///
    /// A non-empty result replaces the snapshot wholesale. An empty result
    /// keeps the prior snapshot (staleness over blankness -- an outdated
    /// list beats a blank one). A failed fetch also keeps the prior
    /// snapshot and surfaces the error to the caller. `loading` is cleared
    /// on every exit path. Safe to call again while a previous call is
    /// unresolved; the later completion wins.
    pub async fn load(&mut self) -> Result<(), LeadpanelError> {
        self.loading = true;
        let result = self.store.fetch_all().await;
        self.loading = false;

        match result {
            Ok(leads) if !leads.is_empty() => {
                debug!(count = leads.len(), "lead snapshot replaced");
                self.leads = leads;
                Ok(())
            }
            Ok(_) => {
                debug!(
                    held = self.leads.len(),
                    "fetch returned no leads, keeping current snapshot"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    held = self.leads.len(),
                    "lead fetch failed, keeping current snapshot"
                );
                Err(e)
            }
        }
    }

    /// Turns the follow-up filter on or off. Changing the visible set
    /// invalidates the page position, so the page resets to 1.
    pub fn set_filter(&mut self, active: bool) {
        self.filter_active = active;
        self.current_page = 1;
    }

    /// Moves to page `page`, clamped into `[1, total_pages()]`. Out-of-range
    /// requests are clamped, never an error.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Flips one lead's automation status, store-confirmed.
    ///
    /// Looks the lead up by identity in the full snapshot (the visible
    /// page may be a reordered slice), negates its current status, and
    /// asks the store to persist the new value. Only a truthful success
    /// applies the value in memory; a declined or failed update leaves the
    /// snapshot untouched. An id that is not in the snapshot is a silent
    /// no-op.
    pub async fn toggle_automation(&mut self, id: i64) -> ToggleOutcome {
        let Some(current) = self
            .leads
            .iter()
            .find(|lead| lead.id == id)
            .map(|lead| lead.automation_paused)
        else {
            debug!(id, "toggle requested for a lead not in the snapshot");
            return ToggleOutcome::UnknownId;
        };

        let paused = !current;
        let confirmed = match self.store.update_status(id, paused).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!(id, error = %e, "status update failed");
                false
            }
        };
        if !confirmed {
            info!(id, "status update declined by store, snapshot unchanged");
            return ToggleOutcome::Denied;
        }

        if let Some(lead) = self.leads.iter_mut().find(|lead| lead.id == id) {
            lead.automation_paused = paused;
        }
        info!(id, paused, "automation status updated");
        ToggleOutcome::Applied { paused }
    }

    // --- Derived views, recomputed on every read ---

    /// The leads visible on the current page, in snapshot order.
    pub fn page_items(&self) -> Vec<Lead> {
        view::page(&self.leads, self.filter_active, self.current_page)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Size of the current (filtered) view.
    pub fn total_count(&self) -> usize {
        view::filtered_count(&self.leads, self.filter_active)
    }

    /// Pages the current view spans; at least 1.
    pub fn total_pages(&self) -> usize {
        view::total_pages(self.total_count())
    }

    /// Aggregate metrics over the full snapshot, ignoring filter and page.
    pub fn metrics(&self) -> LeadMetrics {
        metrics::aggregate(&self.leads)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Size of the full snapshot, ignoring the filter.
    pub fn snapshot_len(&self) -> usize {
        self.leads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadpanel_test_utils::fixtures;
    use leadpanel_test_utils::mock_store::MockLeadStore;

    fn snapshot(total: usize, zero_follow_ups: usize) -> Vec<Lead> {
        (0..total)
            .map(|i| {
                let mut lead = fixtures::lead(i as i64 + 1);
                lead.follow_up_count = if i < zero_follow_ups { 0 } else { 1 };
                lead
            })
            .collect()
    }

    fn controller_over(store: &Arc<MockLeadStore>) -> LeadListController {
        LeadListController::new(store.clone())
    }

    #[tokio::test]
    async fn load_replaces_the_snapshot() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(4, 0)));
        let mut controller = controller_over(&store);

        controller.load().await.unwrap();
        assert_eq!(controller.snapshot_len(), 4);
        assert!(!controller.loading());
    }

    #[tokio::test]
    async fn empty_fetch_keeps_the_previous_snapshot() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(5, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        assert_eq!(controller.snapshot_len(), 5);

        store.queue_fetch(Vec::new()).await;
        controller.load().await.unwrap();

        assert_eq!(
            controller.snapshot_len(),
            5,
            "an empty fetch must not blank out a populated view"
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_snapshot_and_surfaces_the_error() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(3, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();

        store.queue_fetch_failure().await;
        let result = controller.load().await;

        assert!(result.is_err());
        assert_eq!(controller.snapshot_len(), 3);
        assert!(!controller.loading(), "loading must clear on the error path");
    }

    #[tokio::test]
    async fn set_filter_resets_the_page() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(40, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();

        controller.set_page(3);
        assert_eq!(controller.current_page(), 3);

        controller.set_filter(true);
        assert_eq!(controller.current_page(), 1);
        assert!(controller.filter_active());
    }

    #[tokio::test]
    async fn set_page_clamps_to_the_valid_range() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(20, 3)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        controller.set_filter(true);

        // 17 filtered leads -> 2 pages.
        assert_eq!(controller.total_pages(), 2);

        controller.set_page(99);
        assert_eq!(controller.current_page(), 2);

        controller.set_page(0);
        assert_eq!(controller.current_page(), 1);
    }

    #[tokio::test]
    async fn filter_and_page_scenario_from_twenty_leads() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(20, 3)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();

        controller.set_filter(true);
        assert_eq!(controller.total_count(), 17);
        assert_eq!(controller.total_pages(), 2);

        controller.set_page(2);
        assert_eq!(controller.page_items().len(), 2);
    }

    #[tokio::test]
    async fn confirmed_toggle_flips_exactly_one_lead() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(6, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        let before = controller.page_items();

        let outcome = controller.toggle_automation(3).await;
        assert_eq!(outcome, ToggleOutcome::Applied { paused: true });

        let after = controller.page_items();
        for (b, a) in before.iter().zip(after.iter()) {
            if b.id == 3 {
                assert!(a.automation_paused);
            } else {
                assert_eq!(b, a, "lead {} must be untouched", b.id);
            }
        }
        assert_eq!(store.update_calls().await, vec![(3, true)]);
    }

    #[tokio::test]
    async fn toggle_negates_the_current_status() {
        let mut leads = snapshot(2, 0);
        leads[1].automation_paused = true;
        let store = Arc::new(MockLeadStore::with_leads(leads));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();

        assert_eq!(
            controller.toggle_automation(2).await,
            ToggleOutcome::Applied { paused: false }
        );
    }

    #[tokio::test]
    async fn denied_toggle_leaves_the_snapshot_unchanged() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(6, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        let before = controller.page_items();

        store.queue_update_denied().await;
        let outcome = controller.toggle_automation(3).await;

        assert_eq!(outcome, ToggleOutcome::Denied);
        assert_eq!(controller.page_items(), before);
    }

    #[tokio::test]
    async fn failed_update_behaves_like_a_denial() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(6, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        let before = controller.page_items();

        store.queue_update_failure().await;
        let outcome = controller.toggle_automation(3).await;

        assert_eq!(outcome, ToggleOutcome::Denied);
        assert_eq!(controller.page_items(), before);
    }

    #[tokio::test]
    async fn unknown_id_is_a_silent_no_op() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(6, 0)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        let before = controller.page_items();

        let outcome = controller.toggle_automation(999).await;

        assert_eq!(outcome, ToggleOutcome::UnknownId);
        assert_eq!(controller.page_items(), before);
        assert!(
            store.update_calls().await.is_empty(),
            "a missing lead must not reach the store"
        );
    }

    #[tokio::test]
    async fn views_are_recomputed_after_each_intent() {
        let store = Arc::new(MockLeadStore::with_leads(snapshot(20, 3)));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();

        assert_eq!(controller.total_count(), 20);
        controller.set_filter(true);
        assert_eq!(controller.total_count(), 17);
        controller.set_filter(false);
        assert_eq!(controller.total_count(), 20);
    }

    #[tokio::test]
    async fn metrics_cover_the_full_snapshot_despite_filtering() {
        let mut leads = snapshot(20, 3);
        leads[0].automation_paused = true;
        let store = Arc::new(MockLeadStore::with_leads(leads));
        let mut controller = controller_over(&store);
        controller.load().await.unwrap();
        controller.set_filter(true);

        let metrics = controller.metrics();
        assert_eq!(metrics.total_leads, 20);
        assert_eq!(metrics.paused_conversations, 1);
    }
}
