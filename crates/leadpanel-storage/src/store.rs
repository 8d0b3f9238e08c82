// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `LeadStore` implementation over the SQLite database.

use async_trait::async_trait;

use leadpanel_config::StorageConfig;
use leadpanel_core::{Lead, LeadStore, LeadpanelError};

use crate::database::Database;
use crate::queries;

/// The SQLite-backed lead store consumed by the dashboard controller.
pub struct SqliteLeadStore {
    db: Database,
}

impl SqliteLeadStore {
    /// Opens the store described by `config`, creating the database file
    /// and schema if needed.
    pub async fn open(config: &StorageConfig) -> Result<Self, LeadpanelError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        Ok(Self { db })
    }

    /// Direct access to the database, for seeding and administration.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn fetch_all(&self) -> Result<Vec<Lead>, LeadpanelError> {
        queries::leads::list_leads(&self.db).await
    }

    async fn update_status(&self, id: i64, paused: bool) -> Result<bool, LeadpanelError> {
        queries::leads::set_automation_paused(&self.db, id, paused).await
    }
}
