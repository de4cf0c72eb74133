// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./lavajato.toml` > `~/.config/lavajato/lavajato.toml` > `/etc/lavajato/lavajato.toml`
//! with environment variable overrides via `LAVAJATO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LavajatoConfig;

/// Top-level sections that env var keys may target.
const SECTIONS: &[&str] = &["app", "auth", "orders"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lavajato/lavajato.toml` (system-wide)
/// 3. `~/.config/lavajato/lavajato.toml` (user XDG config)
/// 4. `./lavajato.toml` (local directory)
/// 5. `LAVAJATO_*` environment variables
pub fn load_config() -> Result<LavajatoConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LavajatoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LavajatoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LavajatoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LavajatoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LavajatoConfig::default()))
        .merge(Toml::file("/etc/lavajato/lavajato.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lavajato/lavajato.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lavajato.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider with explicit section-to-dot mapping.
///
/// `Env::split("_")` would turn `LAVAJATO_AUTH_MIN_PASSWORD_LENGTH` into
/// `auth.min.password.length`; only the first segment is a section.
fn env_provider() -> Env {
    Env::prefixed("LAVAJATO_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
///
/// `auth_min_password_length` becomes `auth.min_password_length`. Keys that
/// do not start with a known section are returned unchanged.
pub fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_split_on_first_section_only() {
        assert_eq!(
            map_env_key("auth_min_password_length"),
            "auth.min_password_length"
        );
        assert_eq!(map_env_key("app_log_level"), "app.log_level");
        assert_eq!(map_env_key("orders_recent_limit"), "orders.recent_limit");
    }

    #[test]
    fn unknown_section_is_left_alone() {
        assert_eq!(map_env_key("approve_all"), "approve_all");
        assert_eq!(map_env_key("pricing_services"), "pricing_services");
    }
}
