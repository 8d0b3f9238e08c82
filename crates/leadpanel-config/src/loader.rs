// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./leadpanel.toml` > `~/.config/leadpanel/leadpanel.toml`
//! > `/etc/leadpanel/leadpanel.toml` with environment variable overrides via the
//! `LEADPANEL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LeadpanelConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/leadpanel/leadpanel.toml` (system-wide)
/// 3. `~/.config/leadpanel/leadpanel.toml` (user XDG config)
/// 4. `./leadpanel.toml` (local directory)
/// 5. `LEADPANEL_*` environment variables
pub fn load_config() -> Result<LeadpanelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LeadpanelConfig::default()))
        .merge(Toml::file("/etc/leadpanel/leadpanel.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("leadpanel/leadpanel.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("leadpanel.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LeadpanelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LeadpanelConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LeadpanelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LeadpanelConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `LEADPANEL_STORAGE_DATABASE_PATH` must
/// map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("LEADPANEL_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: LEADPANEL_STORAGE_DATABASE_PATH -> "storage_database_path"
        let mapped = key
            .as_str()
            .replacen("panel_", "panel.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("dashboard_", "dashboard.", 1);
        mapped.into()
    })
}
