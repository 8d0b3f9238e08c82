// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the real stack -- temp SQLite store plus a
//! `LeadListController` over it -- so integration tests drive the same
//! path the CLI does.

use std::sync::Arc;

use leadpanel_config::StorageConfig;
use leadpanel_core::{Lead, LeadpanelError};
use leadpanel_dashboard::LeadListController;
use leadpanel_storage::{SqliteLeadStore, queries};

/// Builder for creating test environments with pre-seeded leads.
pub struct TestHarnessBuilder {
    leads: Vec<Lead>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self { leads: Vec::new() }
    }

    /// Seed the store with the given leads before the controller sees it.
    pub fn with_leads(mut self, leads: Vec<Lead>) -> Self {
        self.leads = leads;
        self
    }

    /// Build the harness: temp directory, real SQLite store, seeded
    /// leads, and a fresh controller.
    pub async fn build(self) -> Result<TestHarness, LeadpanelError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| LeadpanelError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage_config = StorageConfig {
            database_path: db_path.to_string_lossy().into_owned(),
            wal_mode: true,
        };
        let store = Arc::new(SqliteLeadStore::open(&storage_config).await?);

        for lead in &self.leads {
            queries::leads::insert_lead(store.database(), lead).await?;
        }

        let controller = LeadListController::new(store.clone());

        Ok(TestHarness {
            store,
            controller,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete test environment: real SQLite store, controller, temp dir
/// kept alive for the harness's lifetime.
pub struct TestHarness {
    /// The SQLite store, for direct assertions and extra seeding.
    pub store: Arc<SqliteLeadStore>,
    /// The controller under test.
    pub controller: LeadListController,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Start building a harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }
}
