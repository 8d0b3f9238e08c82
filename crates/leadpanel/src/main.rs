// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leadpanel - operator dashboard for an automated lead messaging pipeline.
//!
//! This binary is a thin presentation layer: every subcommand builds a
//! controller over the configured store, issues intents, and renders the
//! derived views.

use clap::{Parser, Subcommand};

mod leads;
mod link;
mod overview;
mod seed;
mod toggle;

/// Leadpanel - operator dashboard for an automated lead messaging pipeline.
#[derive(Parser, Debug)]
#[command(name = "leadpanel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a page of the lead list.
    Leads {
        /// Page to show (1-based, clamped to the valid range).
        #[arg(long)]
        page: Option<usize>,
        /// Only show leads with at least one follow-up attempt.
        #[arg(long)]
        follow_up: bool,
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Show aggregate engagement metrics.
    Overview {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Pause or resume automation for one lead (store-confirmed).
    Toggle {
        /// Lead id to toggle.
        id: i64,
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Print the WhatsApp contact link for a lead.
    Link {
        /// Lead id to link to.
        id: i64,
    },
    /// Fill the configured database with demo leads.
    Seed {
        /// How many leads to generate.
        #[arg(long, default_value_t = 30)]
        count: usize,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match leadpanel_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            leadpanel_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.panel.log_level);

    let result = match cli.command {
        Commands::Leads {
            page,
            follow_up,
            json,
            plain,
        } => leads::run_leads(&config, page, follow_up, json, plain).await,
        Commands::Overview { json, plain } => overview::run_overview(&config, json, plain).await,
        Commands::Toggle { id, json } => toggle::run_toggle(&config, id, json).await,
        Commands::Link { id } => link::run_link(&config, id).await,
        Commands::Seed { count } => seed::run_seed(&config, count).await,
    };

    if let Err(e) = result {
        eprintln!("leadpanel: {e}");
        std::process::exit(1);
    }
}

/// Route tracing to stderr so command output stays pipeable. `RUST_LOG`
/// overrides the configured level.
fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
