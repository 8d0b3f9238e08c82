// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead CRUD operations.

use leadpanel_core::{Lead, LeadpanelError};
use rusqlite::params;

use crate::database::Database;

fn lead_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lead> {
    Ok(Lead {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        interested: row.get(3)?,
        product_of_interest: row.get(4)?,
        follow_up_count: row.get(5)?,
        automation_paused: row.get(6)?,
        created_at: row.get(7)?,
    })
}

const LEAD_COLUMNS: &str =
    "id, name, phone, interested, product_of_interest, follow_up_count, automation_paused, created_at";

/// Insert a lead with an explicit id (ids are store-assigned; the pipeline
/// and fixtures both insert fully-formed records).
pub async fn insert_lead(db: &Database, lead: &Lead) -> Result<(), LeadpanelError> {
    let lead = lead.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO leads (id, name, phone, interested, product_of_interest,
                                    follow_up_count, automation_paused, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    lead.id,
                    lead.name,
                    lead.phone,
                    lead.interested,
                    lead.product_of_interest,
                    lead.follow_up_count,
                    lead.automation_paused,
                    lead.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a lead by id.
pub async fn get_lead(db: &Database, id: i64) -> Result<Option<Lead>, LeadpanelError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn
                .prepare(&format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = ?1"))?;
            let result = stmt.query_row(params![id], lead_from_row);
            match result {
                Ok(lead) => Ok(Some(lead)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List every lead, newest first. This listing order is the snapshot
/// order the dashboard displays.
pub async fn list_leads(db: &Database) -> Result<Vec<Lead>, LeadpanelError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], lead_from_row)?;
            let mut leads = Vec::new();
            for row in rows {
                leads.push(row?);
            }
            Ok(leads)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set a lead's automation-paused flag.
///
/// Returns `true` iff a row was actually updated -- the durable-write
/// confirmation the dashboard's pessimistic toggle relies on.
pub async fn set_automation_paused(
    db: &Database,
    id: i64,
    paused: bool,
) -> Result<bool, LeadpanelError> {
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE leads SET automation_paused = ?1 WHERE id = ?2",
                params![paused, id],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Number of leads in the store.
pub async fn count_leads(db: &Database) -> Result<u64, LeadpanelError> {
    db.connection()
        .call(|conn| {
            let count: i64 = conn.query_row("SELECT count(*) FROM leads", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Highest lead id currently in the store, or 0 when empty. Used by the
/// seeder to pick fresh ids.
pub async fn max_lead_id(db: &Database) -> Result<i64, LeadpanelError> {
    db.connection()
        .call(|conn| {
            let max: Option<i64> =
                conn.query_row("SELECT max(id) FROM leads", [], |row| row.get(0))?;
            Ok(max.unwrap_or(0))
        })
        .await
        .map_err(crate::database::map_tr_err)
}
