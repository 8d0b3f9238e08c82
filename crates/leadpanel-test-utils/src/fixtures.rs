// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead fixtures for tests.

use chrono::{DateTime, Utc};
use leadpanel_core::Lead;

/// A plain active lead with the given id: named, reachable, no follow-ups
/// yet, automation running, created now. Tests mutate the fields they
/// care about.
pub fn lead(id: i64) -> Lead {
    lead_created_at(id, Utc::now())
}

/// Same as [`lead`], with an explicit creation time for recency-window
/// tests.
pub fn lead_created_at(id: i64, created_at: DateTime<Utc>) -> Lead {
    Lead {
        id,
        name: Some(format!("Lead {id}")),
        phone: Some(format!("(11) 9{id:04}-{:04}", id * 7 % 10_000)),
        interested: false,
        product_of_interest: None,
        follow_up_count: 0,
        automation_paused: false,
        created_at,
    }
}
