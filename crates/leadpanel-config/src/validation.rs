// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and digit-only country codes.

use crate::diagnostic::ConfigError;
use crate::model::LeadpanelConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &LeadpanelConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.panel.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "panel.name must not be empty".to_string(),
        });
    }

    let level = config.panel.log_level.trim();
    if !KNOWN_LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "panel.log_level `{level}` is not one of {}",
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let cc = config.dashboard.whatsapp_country_code.trim();
    if cc.is_empty() || !cc.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "dashboard.whatsapp_country_code must be digits only, got `{cc}`"
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
