// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadpanel toggle` command implementation.
//!
//! One store-confirmed automation toggle. The printed message mirrors the
//! controller's outcome: applied, declined, or unknown id. A declined or
//! unknown toggle is not a process failure -- the panel keeps operating on
//! the state the store last confirmed.

use std::sync::Arc;

use leadpanel_config::model::LeadpanelConfig;
use leadpanel_core::LeadpanelError;
use leadpanel_dashboard::{LeadListController, ToggleOutcome};
use leadpanel_storage::SqliteLeadStore;

/// Run the `leadpanel toggle` command.
pub async fn run_toggle(
    config: &LeadpanelConfig,
    id: i64,
    json: bool,
) -> Result<(), LeadpanelError> {
    let store = Arc::new(SqliteLeadStore::open(&config.storage).await?);
    let mut controller = LeadListController::new(store);
    controller.load().await?;

    let outcome = controller.toggle_automation(id).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        println!("{}", outcome_message(id, outcome));
    }

    Ok(())
}

fn outcome_message(id: i64, outcome: ToggleOutcome) -> String {
    match outcome {
        ToggleOutcome::Applied { paused: true } => {
            format!("Automation paused for lead {id}.")
        }
        ToggleOutcome::Applied { paused: false } => {
            format!("Automation resumed for lead {id}.")
        }
        ToggleOutcome::Denied => {
            format!("Store declined the update for lead {id}; status unchanged.")
        }
        ToggleOutcome::UnknownId => {
            format!("No lead with id {id} in the current snapshot.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_lead_and_direction() {
        assert_eq!(
            outcome_message(3, ToggleOutcome::Applied { paused: true }),
            "Automation paused for lead 3."
        );
        assert_eq!(
            outcome_message(3, ToggleOutcome::Applied { paused: false }),
            "Automation resumed for lead 3."
        );
        assert!(outcome_message(3, ToggleOutcome::Denied).contains("unchanged"));
        assert!(outcome_message(99, ToggleOutcome::UnknownId).contains("99"));
    }
}
