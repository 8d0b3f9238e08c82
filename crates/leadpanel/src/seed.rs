// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadpanel seed` command implementation.
//!
//! Fills the configured database with demo leads so the panel can be
//! exercised without the real pipeline writing to it.

use chrono::{TimeDelta, Utc};
use leadpanel_config::model::LeadpanelConfig;
use leadpanel_core::{Lead, LeadpanelError};
use leadpanel_storage::{SqliteLeadStore, queries};
use tracing::info;

const NAMES: &[&str] = &[
    "Ana Souza",
    "Bruno Lima",
    "Carla Mendes",
    "Diego Rocha",
    "Elisa Prado",
    "Fábio Costa",
    "Gabriela Nunes",
    "Heitor Alves",
];

const PRODUCTS: &[&str] = &["plano mensal", "plano anual", "consultoria", "upgrade"];

/// Run the `leadpanel seed` command.
pub async fn run_seed(config: &LeadpanelConfig, count: usize) -> Result<(), LeadpanelError> {
    let store = SqliteLeadStore::open(&config.storage).await?;
    let next_id = queries::leads::max_lead_id(store.database()).await? + 1;

    let now = Utc::now();
    for offset in 0..count {
        let lead = demo_lead(next_id + offset as i64, offset, now);
        queries::leads::insert_lead(store.database(), &lead).await?;
    }

    info!(count, first_id = next_id, "seeded demo leads");
    println!(
        "Seeded {count} demo leads into {}.",
        config.storage.database_path
    );
    Ok(())
}

/// Deterministic demo lead: cycles names and products, staggers creation
/// dates over the last two weeks, and mixes in interested/paused/
/// follow-up variety.
fn demo_lead(id: i64, offset: usize, now: chrono::DateTime<Utc>) -> Lead {
    Lead {
        id,
        name: Some(NAMES[offset % NAMES.len()].to_string()),
        phone: Some(format!("(11) 9{:04}-{:04}", 6000 + offset, 1000 + offset * 37 % 9000)),
        interested: offset % 3 == 0,
        product_of_interest: (offset % 4 != 3).then(|| PRODUCTS[offset % PRODUCTS.len()].to_string()),
        follow_up_count: (offset % 4) as u32,
        automation_paused: offset % 5 == 0,
        created_at: now - TimeDelta::days((offset % 14) as i64) - TimeDelta::minutes(offset as i64),
    }
}
