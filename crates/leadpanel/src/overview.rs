// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadpanel overview` command implementation.
//!
//! Shows the four aggregate metrics over the full snapshot: total leads,
//! interested leads, new in the last 7 days, and paused conversations.

use std::io::IsTerminal;
use std::sync::Arc;

use leadpanel_config::model::LeadpanelConfig;
use leadpanel_core::LeadpanelError;
use leadpanel_dashboard::{LeadListController, LeadMetrics};
use leadpanel_storage::SqliteLeadStore;

/// Run the `leadpanel overview` command.
pub async fn run_overview(
    config: &LeadpanelConfig,
    json: bool,
    plain: bool,
) -> Result<(), LeadpanelError> {
    let store = Arc::new(SqliteLeadStore::open(&config.storage).await?);
    let mut controller = LeadListController::new(store);
    controller.load().await?;

    let metrics = controller.metrics();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&metrics).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_overview(&config.panel.name, &metrics, use_color);
    }

    Ok(())
}

/// Print the metric cards as aligned lines.
fn print_overview(panel_name: &str, metrics: &LeadMetrics, use_color: bool) {
    println!();
    println!("  {panel_name} overview");
    println!("  {}", "-".repeat(35));
    println!("    {}", metric_line("Total leads", metrics.total_leads, use_color));
    println!(
        "    {}",
        metric_line("Interested", metrics.interested_leads, use_color)
    );
    println!(
        "    {}",
        metric_line("New (7 days)", metrics.new_last_7_days, use_color)
    );
    println!(
        "    {}",
        metric_line("Paused", metrics.paused_conversations, use_color)
    );
    println!();
}

fn metric_line(label: &str, value: usize, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{label:<14} {}", value.to_string().bold())
    } else {
        format!("{label:<14} {value}")
    }
}
