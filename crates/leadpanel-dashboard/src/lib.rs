// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard core for the Leadpanel operator panel.
//!
//! Holds the lead-list state machine ([`LeadListController`]), the pure
//! view-derivation functions (filter + pagination), the metrics
//! aggregator, and contact link helpers. The presentation layer -- the
//! `leadpanel` CLI here, but anything that can poll accessors and issue
//! intents -- sits on top of this crate.

pub mod contact;
pub mod controller;
pub mod metrics;
pub mod view;

pub use controller::{LeadListController, ToggleOutcome};
pub use metrics::LeadMetrics;
pub use view::PAGE_SIZE;
