// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadpanel link` command implementation.
//!
//! Prints the WhatsApp deep link for one lead so the operator can jump
//! into the conversation directly.

use leadpanel_config::model::LeadpanelConfig;
use leadpanel_core::LeadpanelError;
use leadpanel_dashboard::contact;
use leadpanel_storage::{SqliteLeadStore, queries};

/// Run the `leadpanel link` command.
pub async fn run_link(config: &LeadpanelConfig, id: i64) -> Result<(), LeadpanelError> {
    let store = SqliteLeadStore::open(&config.storage).await?;

    let Some(lead) = queries::leads::get_lead(store.database(), id).await? else {
        println!("No lead with id {id}.");
        return Ok(());
    };

    let link = lead
        .phone
        .as_deref()
        .and_then(|phone| contact::whatsapp_link(phone, &config.dashboard.whatsapp_country_code));

    match link {
        Some(link) => println!("{link}"),
        None => println!("Lead {id} has no usable phone number."),
    }

    Ok(())
}
