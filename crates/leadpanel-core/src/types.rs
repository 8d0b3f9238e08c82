// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Leadpanel workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record tracked for automated outreach.
///
/// Leads are created and enriched by the upstream messaging pipeline; the
/// dashboard core reads every field and writes exactly one:
/// `automation_paused`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, assigned by the store. Immutable.
    pub id: i64,

    /// Display name, if the pipeline captured one.
    pub name: Option<String>,

    /// Contact phone number, free-form (may contain punctuation).
    pub phone: Option<String>,

    /// Whether upstream automation flagged this lead as interested.
    /// Read-only to the dashboard.
    pub interested: bool,

    /// Free-text product the lead asked about.
    pub product_of_interest: Option<String>,

    /// Number of follow-up attempts recorded for this lead.
    pub follow_up_count: u32,

    /// `true` suspends the automated messaging pipeline for this contact.
    /// The only field the dashboard mutates, and only after the store
    /// confirms the write.
    pub automation_paused: bool,

    /// When the lead entered the pipeline. Drives the recency metrics.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Whether at least one follow-up attempt has been recorded.
    pub fn needs_follow_up(&self) -> bool {
        self.follow_up_count >= 1
    }
}
