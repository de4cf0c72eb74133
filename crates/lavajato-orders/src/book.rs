// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory, per-session collection of orders.
//!
//! Mutations take `&mut self`, so within one session transitions apply in
//! the order they are issued. Nothing is persisted.

use chrono::{DateTime, Utc};
use lavajato_config::LavajatoConfig;
use lavajato_core::OrderId;
use thiserror::Error;
use tracing::{debug, info};

use crate::lifecycle::{apply_transition_at, TransitionError};
use crate::order::{Order, OrderDraft};
use crate::pricing::{PriceTable, PricingError};
use crate::status::OrderStatus;

/// Car model recorded when the customer leaves it blank.
pub const DEFAULT_CAR_MODEL: &str = "Não informado";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("required field `{field}` is empty")]
    InvalidDraft { field: &'static str },

    #[error("order {id} is {status} and has no next step")]
    NoNextStatus { id: OrderId, status: OrderStatus },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Orders placed during one session.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
    prices: PriceTable,
    default_car_model: String,
}

impl OrderBook {
    pub fn new(prices: PriceTable, default_car_model: impl Into<String>) -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
            prices,
            default_car_model: default_car_model.into(),
        }
    }

    /// Book using the configured price table and car model default.
    pub fn from_config(config: &LavajatoConfig) -> Self {
        Self::new(
            PriceTable::from_config(&config.pricing),
            config.orders.default_car_model.clone(),
        )
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Validate, price and record a new order in `Pending`.
    pub fn submit(&mut self, draft: OrderDraft) -> Result<&Order, OrderError> {
        self.submit_at(draft, Utc::now())
    }

    pub fn submit_at(&mut self, draft: OrderDraft, now: DateTime<Utc>) -> Result<&Order, OrderError> {
        let draft = draft
            .normalize(&self.default_car_model)
            .map_err(|field| OrderError::InvalidDraft { field })?;
        let total_cents = self.prices.calculate_total(&draft.service, &draft.extras)?;

        let id = OrderId(self.next_id.to_string());
        self.next_id += 1;

        info!(
            order_id = %id,
            service = draft.service.as_str(),
            extras = draft.extras.len(),
            total_cents,
            "order submitted"
        );

        let index = self.orders.len();
        self.orders.push(Order {
            id,
            customer_name: draft.customer_name,
            phone: draft.phone,
            email: draft.email,
            car_model: draft.car_model,
            car_plate: draft.car_plate,
            service: draft.service,
            extras: draft.extras,
            status: OrderStatus::Pending,
            total_cents,
            created_at: now,
            ready_at: None,
            completed_at: None,
            updated_at: None,
        });
        Ok(&self.orders[index])
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// All orders, oldest first.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn list_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Move an order to `to`. The stored order is unchanged on failure.
    pub fn update_status(&mut self, id: &OrderId, to: OrderStatus) -> Result<&Order, OrderError> {
        self.update_status_at(id, to, Utc::now())
    }

    pub fn update_status_at(
        &mut self,
        id: &OrderId,
        to: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<&Order, OrderError> {
        let index = self.index_of(id)?;
        let current = &self.orders[index];
        let next = apply_transition_at(current, to, now).inspect_err(|err| {
            debug!(order_id = %id, error = %err, "transition rejected");
        })?;

        info!(order_id = %id, from = %current.status, to = %to, "order status changed");
        self.orders[index] = next;
        Ok(&self.orders[index])
    }

    /// Move an order one step along the default path.
    pub fn advance(&mut self, id: &OrderId) -> Result<&Order, OrderError> {
        self.advance_at(id, Utc::now())
    }

    pub fn advance_at(&mut self, id: &OrderId, now: DateTime<Utc>) -> Result<&Order, OrderError> {
        let status = self.orders[self.index_of(id)?].status;
        let to = status.next_status().ok_or_else(|| OrderError::NoNextStatus {
            id: id.clone(),
            status,
        })?;
        self.update_status_at(id, to, now)
    }

    /// Remove an order for good, returning it.
    pub fn delete(&mut self, id: &OrderId) -> Result<Order, OrderError> {
        let index = self.index_of(id)?;
        let removed = self.orders.remove(index);
        info!(order_id = %id, status = %removed.status, "order deleted");
        Ok(removed)
    }

    fn index_of(&self, id: &OrderId) -> Result<usize, OrderError> {
        self.orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(PriceTable::standard(), DEFAULT_CAR_MODEL)
    }
}
