// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard figures derived from an order list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::order::Order;
use crate::status::OrderStatus;

/// Number of orders in the "recent" panel unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Snapshot of the shop's day. "Today" is the UTC calendar day of `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub today_orders: usize,
    /// Pending and Waiting.
    pub pending: usize,
    /// InProgress and Processing.
    pub in_progress: usize,
    pub ready: usize,
    pub completed: usize,
    pub completed_today: usize,
    pub total_revenue_cents: u64,
    pub today_revenue_cents: u64,
    pub average_ticket_cents: u64,
    /// Newest first.
    pub recent: Vec<Order>,
}

impl DashboardStats {
    pub fn compute(orders: &[Order], now: DateTime<Utc>) -> Self {
        Self::compute_with_limit(orders, now, DEFAULT_RECENT_LIMIT)
    }

    pub fn compute_with_limit(orders: &[Order], now: DateTime<Utc>, recent_limit: usize) -> Self {
        let today = now.date_naive();
        let is_today = |at: DateTime<Utc>| at.date_naive() == today;
        let count = |pred: &dyn Fn(&Order) -> bool| orders.iter().filter(|o| pred(*o)).count();

        // Saturate rather than wrap.
        let total_revenue_cents = orders
            .iter()
            .fold(0u64, |sum, o| sum.saturating_add(o.total_cents));
        let today_revenue_cents = orders
            .iter()
            .filter(|o| is_today(o.created_at))
            .fold(0u64, |sum, o| sum.saturating_add(o.total_cents));

        let mut recent: Vec<Order> = orders.to_vec();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(recent_limit);

        Self {
            total_orders: orders.len(),
            today_orders: count(&|o| is_today(o.created_at)),
            pending: count(&|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Waiting)),
            in_progress: count(&|o| {
                matches!(o.status, OrderStatus::InProgress | OrderStatus::Processing)
            }),
            ready: count(&|o| o.status == OrderStatus::Ready),
            completed: count(&|o| o.status == OrderStatus::Completed),
            completed_today: count(&|o| o.completed_at.is_some_and(is_today)),
            total_revenue_cents,
            today_revenue_cents,
            average_ticket_cents: total_revenue_cents
                .checked_div(orders.len() as u64)
                .unwrap_or(0),
            recent,
        }
    }
}
