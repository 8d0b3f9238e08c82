// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Leadpanel dashboard.
//!
//! Provides WAL-mode SQLite storage with an idempotent embedded schema, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed query
//! operations for lead records. `SqliteLeadStore` adapts the database to
//! the `LeadStore` trait the dashboard controller consumes.

pub mod database;
pub mod queries;
pub mod store;

pub use database::Database;
pub use store::SqliteLeadStore;
