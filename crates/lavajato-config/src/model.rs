// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lavajato car-wash manager.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Lavajato configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LavajatoConfig {
    /// Shop identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Login, registration, and demo account settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Order intake and dashboard settings.
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Service and add-on price table.
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Shop identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name of the shop.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "Lava Jato".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Login and registration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Seed the in-memory directory with the employee and admin demo accounts.
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,

    /// Minimum password length accepted at registration.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Artificial delay applied to every login/register call, in milliseconds.
    /// Zero disables it.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            seed_demo_users: default_seed_demo_users(),
            min_password_length: default_min_password_length(),
            simulated_latency_ms: 0,
        }
    }
}

fn default_seed_demo_users() -> bool {
    true
}

fn default_min_password_length() -> usize {
    6
}

/// Order intake and dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrdersConfig {
    /// Car model recorded when the customer leaves the field blank.
    #[serde(default = "default_car_model")]
    pub default_car_model: String,

    /// Number of orders listed under "recent" on the dashboard.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            default_car_model: default_car_model(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_car_model() -> String {
    "Não informado".to_string()
}

fn default_recent_limit() -> usize {
    5
}

/// Price table for primary wash services and add-ons.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Primary wash services. Exactly one is chosen per order.
    #[serde(default = "default_services")]
    pub services: Vec<ServicePriceConfig>,

    /// Optional add-on services.
    #[serde(default = "default_extras")]
    pub extras: Vec<ExtraPriceConfig>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
            extras: default_extras(),
        }
    }
}

/// A primary wash service entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServicePriceConfig {
    /// Stable identifier used on orders (e.g. `simple`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: u64,
    /// Expected duration in minutes.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
}

fn default_duration_minutes() -> u32 {
    30
}

/// An add-on service entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraPriceConfig {
    /// Stable identifier used on orders (e.g. `cera`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: u64,
    /// Whether staff must approve the add-on before starting.
    #[serde(default)]
    pub needs_approval: bool,
}

fn service(id: &str, name: &str, price_cents: u64, duration_minutes: u32) -> ServicePriceConfig {
    ServicePriceConfig {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        duration_minutes,
    }
}

fn extra(id: &str, name: &str, price_cents: u64, needs_approval: bool) -> ExtraPriceConfig {
    ExtraPriceConfig {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        needs_approval,
    }
}

fn default_services() -> Vec<ServicePriceConfig> {
    vec![
        service("simple", "Lavagem Simples", 15_00, 30),
        service("complete", "Lavagem Completa", 25_00, 45),
        service("detailed", "Lavagem Detalhada", 40_00, 60),
        service("premium", "Lavagem Premium", 60_00, 90),
    ]
}

fn default_extras() -> Vec<ExtraPriceConfig> {
    vec![
        extra("motor", "Lavagem do Motor", 20_00, true),
        extra("cera", "Enceramento", 15_00, false),
        extra("aspiracao", "Aspiração Detalhada", 10_00, false),
        extra("pneus", "Pretinho nos Pneus", 8_00, false),
    ]
}
