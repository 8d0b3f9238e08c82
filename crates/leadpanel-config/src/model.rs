// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Leadpanel dashboard.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Leadpanel configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadpanelConfig {
    /// Panel identity and logging settings.
    #[serde(default)]
    pub panel: PanelConfig,

    /// Lead store backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Dashboard rendering settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Panel identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Display name of the panel.
    #[serde(default = "default_panel_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            name: default_panel_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_panel_name() -> String {
    "leadpanel".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Lead store backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file holding the leads.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("leadpanel").join("leadpanel.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("leadpanel.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Dashboard rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Country calling code prepended when building WhatsApp contact
    /// links from lead phone numbers.
    #[serde(default = "default_whatsapp_country_code")]
    pub whatsapp_country_code: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            whatsapp_country_code: default_whatsapp_country_code(),
        }
    }
}

fn default_whatsapp_country_code() -> String {
    "55".to_string()
}
