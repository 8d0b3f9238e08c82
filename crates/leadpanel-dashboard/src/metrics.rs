// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate engagement metrics over the full lead snapshot.
//!
//! Pure functions: no I/O, no mutation, same snapshot in -- same counters
//! out. Metrics always cover the whole snapshot, independent of the
//! follow-up filter and pagination state.

use chrono::{DateTime, TimeDelta, Utc};
use leadpanel_core::Lead;
use serde::Serialize;

/// How far back a lead still counts as "new".
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Summary counters shown on the dashboard overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadMetrics {
    /// Total contacts in the snapshot.
    pub total_leads: usize,
    /// Contacts flagged as interested by upstream automation.
    pub interested_leads: usize,
    /// Contacts created within the last [`RECENT_WINDOW_DAYS`] days.
    pub new_last_7_days: usize,
    /// Contacts whose automation is currently paused.
    pub paused_conversations: usize,
}

/// Aggregates the snapshot against the current wall clock.
///
/// Recomputed on every call, so the recency window drifts correctly as
/// time passes between loads.
pub fn aggregate(leads: &[Lead]) -> LeadMetrics {
    aggregate_at(leads, Utc::now())
}

/// Aggregates the snapshot against an explicit `now`, with an inclusive
/// lower bound on the recency window (`created_at >= now - 7 days`).
pub fn aggregate_at(leads: &[Lead], now: DateTime<Utc>) -> LeadMetrics {
    let window_start = now - TimeDelta::days(RECENT_WINDOW_DAYS);
    LeadMetrics {
        total_leads: leads.len(),
        interested_leads: leads.iter().filter(|l| l.interested).count(),
        new_last_7_days: leads
            .iter()
            .filter(|l| l.created_at >= window_start)
            .count(),
        paused_conversations: leads.iter().filter(|l| l.automation_paused).count(),
    }
}
