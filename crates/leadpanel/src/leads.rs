// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leadpanel leads` command implementation.
//!
//! Loads a snapshot, applies the follow-up filter and page intents, and
//! renders the current page of the lead table.

use std::io::IsTerminal;
use std::sync::Arc;

use leadpanel_config::model::LeadpanelConfig;
use leadpanel_core::{Lead, LeadpanelError};
use leadpanel_dashboard::{LeadListController, PAGE_SIZE};
use leadpanel_storage::SqliteLeadStore;
use serde::Serialize;

/// Structured page output for `--json` mode.
#[derive(Debug, Serialize)]
struct LeadsPage {
    page: usize,
    total_pages: usize,
    total_count: usize,
    filter_active: bool,
    items: Vec<Lead>,
}

/// Run the `leadpanel leads` command.
pub async fn run_leads(
    config: &LeadpanelConfig,
    page: Option<usize>,
    follow_up: bool,
    json: bool,
    plain: bool,
) -> Result<(), LeadpanelError> {
    let store = Arc::new(SqliteLeadStore::open(&config.storage).await?);
    let mut controller = LeadListController::new(store);
    controller.load().await?;

    controller.set_filter(follow_up);
    if let Some(page) = page {
        controller.set_page(page);
    }

    if json {
        let out = LeadsPage {
            page: controller.current_page(),
            total_pages: controller.total_pages(),
            total_count: controller.total_count(),
            filter_active: controller.filter_active(),
            items: controller.page_items(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_lead_table(&controller, use_color);
    }

    Ok(())
}

/// Print one page of the lead table with a pagination footer.
fn print_lead_table(controller: &LeadListController, use_color: bool) {
    let items = controller.page_items();

    println!();
    println!(
        "  {:<20} {:<16} {:<9} {:<9} {:<18} {:>10}",
        "NAME", "CONTACT", "STATUS", "INTEREST", "PRODUCT", "FOLLOW-UPS"
    );
    println!("  {}", "-".repeat(87));

    for lead in &items {
        println!(
            "  {:<20} {:<16} {:<9} {:<9} {:<18} {:>10}",
            clip(display_or_dash(&lead.name), 20),
            clip(display_or_dash(&lead.phone), 16),
            status_label(lead.automation_paused, use_color),
            if lead.interested { "yes" } else { "no" },
            clip(display_or_dash(&lead.product_of_interest), 18),
            lead.follow_up_count,
        );
    }

    if items.is_empty() {
        println!("  (no leads on this page)");
    }

    println!();
    println!("  {}", page_footer(controller, items.len()));
    println!();
}

/// Colored Active/Paused badge; plain words when colors are off.
fn status_label(paused: bool, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        if paused {
            "Paused".yellow().to_string()
        } else {
            "Active".green().to_string()
        }
    } else if paused {
        "Paused".to_string()
    } else {
        "Active".to_string()
    }
}

/// `start-end of total · page p/n` footer line.
fn page_footer(controller: &LeadListController, shown: usize) -> String {
    let total = controller.total_count();
    let page = controller.current_page();
    let (start, end) = if shown == 0 {
        (0, 0)
    } else {
        let start = (page - 1) * PAGE_SIZE + 1;
        (start, start + shown - 1)
    };
    format!(
        "{start}-{end} of {total} · page {page}/{}",
        controller.total_pages()
    )
}

fn display_or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("—")
}

/// Truncate to `width` characters with a trailing ellipsis.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
