// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as recognised log levels, unique price-table ids, and positive prices.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::LavajatoConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LavajatoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.app.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "app.name must not be empty".to_string(),
        });
    }

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.auth.min_password_length < 1 {
        errors.push(ConfigError::Validation {
            message: "auth.min_password_length must be at least 1".to_string(),
        });
    }

    if config.orders.recent_limit < 1 {
        errors.push(ConfigError::Validation {
            message: "orders.recent_limit must be at least 1".to_string(),
        });
    }

    if config.orders.default_car_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "orders.default_car_model must not be empty".to_string(),
        });
    }

    if config.pricing.services.is_empty() {
        errors.push(ConfigError::Validation {
            message: "pricing.services must list at least one service".to_string(),
        });
    }

    // Primary and add-on ids share one namespace on the order form.
    let mut seen_ids = HashSet::new();
    let services = config
        .pricing
        .services
        .iter()
        .enumerate()
        .map(|(i, s)| ("pricing.services", i, s.id.as_str(), s.price_cents));
    let extras = config
        .pricing
        .extras
        .iter()
        .enumerate()
        .map(|(i, e)| ("pricing.extras", i, e.id.as_str(), e.price_cents));

    for (table, i, id, price_cents) in services.chain(extras) {
        if id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{table} entry {i} has an empty id"),
            });
            continue;
        }
        // Order input is trimmed, so a padded id could never be selected.
        if id != id.trim() {
            errors.push(ConfigError::Validation {
                message: format!("{table} entry {i} id `{id}` has surrounding whitespace"),
            });
        }
        if !seen_ids.insert(id) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate price-table id `{id}` in {table}"),
            });
        }
        if price_cents == 0 {
            errors.push(ConfigError::Validation {
                message: format!("{table} `{id}` must have a positive price_cents"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtraPriceConfig, ServicePriceConfig};

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = LavajatoConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = LavajatoConfig::default();
        config.app.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "app.log_level"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = LavajatoConfig::default();
        config.app.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_password_length_fails_validation() {
        let mut config = LavajatoConfig::default();
        config.auth.min_password_length = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "min_password_length"));
    }

    #[test]
    fn empty_service_list_fails_validation() {
        let mut config = LavajatoConfig::default();
        config.pricing.services.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "at least one service"));
    }

    #[test]
    fn duplicate_ids_across_tables_fail_validation() {
        let mut config = LavajatoConfig::default();
        config.pricing.extras.push(ExtraPriceConfig {
            id: "simple".to_string(),
            name: "Clash".to_string(),
            price_cents: 100,
            needs_approval: false,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "duplicate price-table id `simple`"));
    }

    #[test]
    fn padded_id_fails_validation() {
        let mut config = LavajatoConfig::default();
        config.pricing.extras[1].id = " cera ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(
            &errors,
            "pricing.extras entry 1 id ` cera ` has surrounding whitespace"
        ));
    }

    #[test]
    fn entry_index_counts_within_each_table() {
        let mut config = LavajatoConfig::default();
        config.pricing.extras[0].id = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "pricing.extras entry 0 has an empty id"));
    }

    #[test]
    fn zero_price_fails_validation() {
        let mut config = LavajatoConfig::default();
        config.pricing.services.push(ServicePriceConfig {
            id: "free".to_string(),
            name: "Free".to_string(),
            price_cents: 0,
            duration_minutes: 10,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "`free` must have a positive price_cents"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = LavajatoConfig::default();
        config.app.name = " ".to_string();
        config.orders.recent_limit = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn custom_price_table_deserializes() {
        let toml_str = r#"
[[pricing.services]]
name = "Express"
id = "express"
price_cents = 1200

[[pricing.extras]]
id = "cera"
name = "Enceramento"
price_cents = 1500
"#;
        let config: LavajatoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pricing.services.len(), 1);
        assert_eq!(config.pricing.services[0].id, "express");
        assert_eq!(config.pricing.services[0].duration_minutes, 30);
        assert!(!config.pricing.extras[0].needs_approval);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn price_entries_deny_unknown_fields() {
        let toml_str = r#"
[[pricing.services]]
id = "express"
name = "Express"
price_cents = 1200
discount = 10
"#;
        assert!(toml::from_str::<LavajatoConfig>(toml_str).is_err());
    }
}
