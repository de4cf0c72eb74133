// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service price table and order total calculation.
//!
//! Prices are integer centavos. Default table:
//!
//! Lavagem Simples:    R$ 15,00, 30 min
//! Lavagem Completa:   R$ 25,00, 45 min
//! Lavagem Detalhada:  R$ 40,00, 60 min
//! Lavagem Premium:    R$ 60,00, 90 min
//! Add-ons: motor R$ 20,00 (needs approval), cera R$ 15,00,
//! aspiração R$ 10,00, pneus R$ 8,00. Each add-on adds 15 minutes.

use lavajato_config::model::PricingConfig;
use serde::Serialize;
use thiserror::Error;

/// Minutes each add-on adds to the wash estimate.
pub const EXTRA_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("unknown service `{0}`")]
    UnknownService(String),

    /// The total does not fit in a `u64` of centavos.
    #[error("order total overflows")]
    TotalOverflow,
}

/// A primary wash service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffer {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
    pub duration_minutes: u32,
}

/// An add-on to a primary service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraOffer {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
    /// Staff must confirm with the customer before performing it.
    pub needs_approval: bool,
}

/// Lookup table for primary services and add-ons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    services: Vec<ServiceOffer>,
    extras: Vec<ExtraOffer>,
}

impl PriceTable {
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            services: config
                .services
                .iter()
                .map(|s| ServiceOffer {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    price_cents: s.price_cents,
                    duration_minutes: s.duration_minutes,
                })
                .collect(),
            extras: config
                .extras
                .iter()
                .map(|e| ExtraOffer {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    price_cents: e.price_cents,
                    needs_approval: e.needs_approval,
                })
                .collect(),
        }
    }

    /// The built-in table.
    pub fn standard() -> Self {
        Self::from_config(&PricingConfig::default())
    }

    pub fn services(&self) -> &[ServiceOffer] {
        &self.services
    }

    pub fn extras(&self) -> &[ExtraOffer] {
        &self.extras
    }

    pub fn service(&self, id: &str) -> Option<&ServiceOffer> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn extra(&self, id: &str) -> Option<&ExtraOffer> {
        self.extras.iter().find(|e| e.id == id)
    }

    /// Order total: primary service price plus every listed add-on.
    ///
    /// Add-ons are summed as given; a repeated id is charged again.
    pub fn calculate_total<S: AsRef<str>>(
        &self,
        service: &str,
        extras: &[S],
    ) -> Result<u64, PricingError> {
        let base = self
            .service(service)
            .ok_or_else(|| PricingError::UnknownService(service.to_string()))?
            .price_cents;

        extras.iter().try_fold(base, |total, id| {
            let id = id.as_ref();
            let extra = self
                .extra(id)
                .ok_or_else(|| PricingError::UnknownService(id.to_string()))?;
            total
                .checked_add(extra.price_cents)
                .ok_or(PricingError::TotalOverflow)
        })
    }

    /// Estimated wash time in minutes, `None` for an unknown service.
    pub fn estimated_minutes(&self, service: &str, extra_count: usize) -> Option<u32> {
        let extra_count = u32::try_from(extra_count).unwrap_or(u32::MAX);
        self.service(service)
            .map(|s| s.duration_minutes.saturating_add(extra_count.saturating_mul(EXTRA_MINUTES)))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Format centavos as Brazilian reais, e.g. `R$ 1.234,50`.
pub fn format_brl(cents: u64) -> String {
    let reais = (cents / 100).to_string();
    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, digit) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("R$ {grouped},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lavajato_config::model::{ExtraPriceConfig, ServicePriceConfig};

    #[test]
    fn standard_service_prices() {
        let table = PriceTable::standard();
        assert_eq!(table.service("simple").unwrap().price_cents, 1500);
        assert_eq!(table.service("complete").unwrap().price_cents, 2500);
        assert_eq!(table.service("detailed").unwrap().price_cents, 4000);
        assert_eq!(table.service("premium").unwrap().price_cents, 6000);
        assert!(table.extra("motor").unwrap().needs_approval);
        assert!(!table.extra("cera").unwrap().needs_approval);
    }

    #[test]
    fn total_is_service_plus_extras() {
        let table = PriceTable::standard();
        // complete 25,00 + cera 15,00 + pneus 8,00
        assert_eq!(table.calculate_total("complete", &["cera", "pneus"]), Ok(4800));
        assert_eq!(table.calculate_total::<&str>("simple", &[]), Ok(1500));
    }

    #[test]
    fn total_is_idempotent() {
        let table = PriceTable::standard();
        let extras = vec!["motor".to_string(), "aspiracao".to_string()];
        let first = table.calculate_total("premium", &extras);
        assert_eq!(first, table.calculate_total("premium", &extras));
        assert_eq!(first, Ok(9000));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let table = PriceTable::standard();
        assert_eq!(
            table.calculate_total::<&str>("diamond", &[]),
            Err(PricingError::UnknownService("diamond".to_string()))
        );
        assert_eq!(
            table.calculate_total("simple", &["polimento"]),
            Err(PricingError::UnknownService("polimento".to_string()))
        );
    }

    #[test]
    fn primary_ids_are_not_add_ons() {
        let table = PriceTable::standard();
        assert!(table.calculate_total("simple", &["complete"]).is_err());
    }

    #[test]
    fn table_follows_config() {
        let config = PricingConfig {
            services: vec![ServicePriceConfig {
                id: "express".to_string(),
                name: "Express".to_string(),
                price_cents: 1200,
                duration_minutes: 20,
            }],
            extras: Vec::new(),
        };
        let table = PriceTable::from_config(&config);
        assert_eq!(table.services().len(), 1);
        assert_eq!(table.calculate_total::<&str>("express", &[]), Ok(1200));
        assert!(table.service("simple").is_none());
    }

    #[test]
    fn oversized_total_is_an_error() {
        let config = PricingConfig {
            services: vec![ServicePriceConfig {
                id: "gold".to_string(),
                name: "Gold".to_string(),
                price_cents: u64::MAX,
                duration_minutes: 90,
            }],
            extras: vec![ExtraPriceConfig {
                id: "cera".to_string(),
                name: "Enceramento".to_string(),
                price_cents: 1,
                needs_approval: false,
            }],
        };
        let table = PriceTable::from_config(&config);
        assert_eq!(table.calculate_total::<&str>("gold", &[]), Ok(u64::MAX));
        assert_eq!(
            table.calculate_total("gold", &["cera"]),
            Err(PricingError::TotalOverflow)
        );
    }

    #[test]
    fn estimate_adds_fifteen_minutes_per_extra() {
        let table = PriceTable::standard();
        assert_eq!(table.estimated_minutes("complete", 0), Some(45));
        assert_eq!(table.estimated_minutes("complete", 2), Some(75));
        assert_eq!(table.estimated_minutes("unknown", 1), None);
    }

    #[test]
    fn brl_formatting() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(800), "R$ 8,00");
        assert_eq!(format_brl(4850), "R$ 48,50");
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(100_000_000), "R$ 1.000.000,00");
    }
}
