// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orders and order drafts.

use chrono::{DateTime, Utc};
use lavajato_core::OrderId;
use serde::{Deserialize, Serialize};

use crate::pricing::PriceTable;
use crate::status::OrderStatus;

/// A customer's wash order.
///
/// Fields are public for reading; status changes go through
/// [`apply_transition`](crate::lifecycle::apply_transition) or the
/// [`OrderBook`](crate::book::OrderBook).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub car_model: String,
    pub car_plate: String,
    /// Primary service id from the price table.
    pub service: String,
    /// Add-on ids from the price table.
    pub extras: Vec<String>,
    pub status: OrderStatus,
    /// Total in centavos.
    pub total_cents: u64,
    pub created_at: DateTime<Utc>,
    pub ready_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Message shown on the tracking screen.
    pub fn tracking_message(&self, prices: &PriceTable) -> String {
        match self.status {
            OrderStatus::Completed => "Finalizado".to_string(),
            OrderStatus::Ready => "Pronto para retirada!".to_string(),
            _ => match prices.estimated_minutes(&self.service, self.extras.len()) {
                Some(minutes) => format!("Tempo estimado: {minutes} minutos"),
                None => self.status.label().to_string(),
            },
        }
    }
}

/// Order form contents as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub car_model: String,
    pub car_plate: String,
    pub service: String,
    pub extras: Vec<String>,
}

impl OrderDraft {
    pub fn new(
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            phone: phone.into(),
            service: service.into(),
            ..Self::default()
        }
    }

    pub fn with_car(mut self, model: impl Into<String>, plate: impl Into<String>) -> Self {
        self.car_model = model.into();
        self.car_plate = plate.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    /// Trim every field and fill the car model default.
    ///
    /// Returns the name of the first required field left blank.
    pub(crate) fn normalize(self, default_car_model: &str) -> Result<Self, &'static str> {
        let customer_name = self.customer_name.trim().to_string();
        let phone = self.phone.trim().to_string();
        let service = self.service.trim().to_string();

        if customer_name.is_empty() {
            return Err("customer_name");
        }
        if phone.is_empty() {
            return Err("phone");
        }
        if service.is_empty() {
            return Err("service");
        }

        let car_model = match self.car_model.trim() {
            "" => default_car_model.to_string(),
            model => model.to_string(),
        };

        Ok(Self {
            customer_name,
            phone,
            email: self
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            car_model,
            car_plate: self.car_plate.trim().to_uppercase(),
            service,
            extras: self
                .extras
                .into_iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_defaults() {
        let draft = OrderDraft::new("  Ana  ", " 11 99999-0000 ", "complete")
            .with_car("   ", " abc1d23 ")
            .with_email(" ")
            .with_extra(" cera ");
        let draft = draft.normalize("Não informado").unwrap();
        assert_eq!(draft.customer_name, "Ana");
        assert_eq!(draft.phone, "11 99999-0000");
        assert_eq!(draft.car_model, "Não informado");
        assert_eq!(draft.car_plate, "ABC1D23");
        assert_eq!(draft.email, None);
        assert_eq!(draft.extras, vec!["cera".to_string()]);
    }

    #[test]
    fn normalize_names_first_missing_field() {
        assert_eq!(
            OrderDraft::new("", "", "").normalize("x").unwrap_err(),
            "customer_name"
        );
        assert_eq!(OrderDraft::new("Ana", " ", "simple").normalize("x").unwrap_err(), "phone");
        assert_eq!(OrderDraft::new("Ana", "1", "").normalize("x").unwrap_err(), "service");
    }

    #[test]
    fn tracking_message_per_status() {
        let prices = PriceTable::standard();
        let mut order = Order {
            id: OrderId("7".to_string()),
            customer_name: "Ana".to_string(),
            phone: "1".to_string(),
            email: None,
            car_model: "Gol".to_string(),
            car_plate: String::new(),
            service: "complete".to_string(),
            extras: vec!["cera".to_string()],
            status: OrderStatus::InProgress,
            total_cents: 4000,
            created_at: Utc::now(),
            ready_at: None,
            completed_at: None,
            updated_at: None,
        };
        assert_eq!(order.tracking_message(&prices), "Tempo estimado: 60 minutos");
        order.status = OrderStatus::Ready;
        assert_eq!(order.tracking_message(&prices), "Pronto para retirada!");
        order.status = OrderStatus::Completed;
        assert_eq!(order.tracking_message(&prices), "Finalizado");
    }
}
