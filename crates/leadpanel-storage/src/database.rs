// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup and lifecycle.
//!
//! All access goes through tokio-rusqlite's single background thread: the
//! `Database` struct IS the single writer. Query functions accept
//! `&Database` and call through `connection().call()`. Do NOT create
//! additional Connection instances for writes.

use std::path::Path;

use leadpanel_core::LeadpanelError;
use tokio_rusqlite::Connection;
use tracing::debug;

/// Idempotent schema, applied on every open.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS leads (
    id                  INTEGER PRIMARY KEY,
    name                TEXT,
    phone               TEXT,
    interested          INTEGER NOT NULL DEFAULT 0,
    product_of_interest TEXT,
    follow_up_count     INTEGER NOT NULL DEFAULT 0,
    automation_paused   INTEGER NOT NULL DEFAULT 0,
    created_at          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_leads_created_at ON leads (created_at DESC);
";

/// Handle to the leads database: one connection, one writer thread.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and applies
    /// PRAGMAs and the schema. `wal_mode` enables write-ahead logging.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, LeadpanelError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| LeadpanelError::Storage { source: e.into() })?;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;
        conn.call(move |conn| {
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")?;
            }
            conn.pragma_update(None, "foreign_keys", "ON")?;
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "leads database opened");
        Ok(Self { conn })
    }

    /// The underlying connection, for query modules.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Closes the database, flushing pending writes.
    pub async fn close(self) -> Result<(), LeadpanelError> {
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Maps a tokio-rusqlite error into the workspace error type.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> LeadpanelError {
    LeadpanelError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_the_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leads.db");
        let db = Database::open(path.to_str().unwrap(), true).await.unwrap();

        let count: i64 = db
            .connection()
            .call(|conn| {
                Ok::<i64, rusqlite::Error>(conn.query_row("SELECT count(*) FROM leads", [], |row| row.get(0))?)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leads.db");
        let db = Database::open(path.to_str().unwrap(), false).await.unwrap();
        db.close().await.unwrap();
        let db = Database::open(path.to_str().unwrap(), false).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/leads.db");
        let db = Database::open(path.to_str().unwrap(), true).await.unwrap();
        db.close().await.unwrap();
        assert!(path.exists());
    }
}
