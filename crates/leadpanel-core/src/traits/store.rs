// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lead store contract consumed by the dashboard controller.

use async_trait::async_trait;

use crate::error::LeadpanelError;
use crate::types::Lead;

/// Backing store for lead records.
///
/// The store owns durability; the dashboard core never retries or caches
/// across sessions. Implementations must be safe to share behind an `Arc`.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Fetches every lead the store knows about, in the store's listing
    /// order. That order is the snapshot order the dashboard displays.
    async fn fetch_all(&self) -> Result<Vec<Lead>, LeadpanelError>;

    /// Sets a lead's automation-paused flag.
    ///
    /// Returns `Ok(true)` iff the store durably persisted the new value.
    /// `Ok(false)` means the write was declined (e.g. the lead no longer
    /// exists). Callers treat `Err` the same as `Ok(false)`.
    async fn update_status(&self, id: i64, paused: bool) -> Result<bool, LeadpanelError>;
}
