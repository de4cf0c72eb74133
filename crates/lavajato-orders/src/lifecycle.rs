// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Applying status transitions to orders.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::order::Order;
use crate::status::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// Move `order` to `to`, stamping timestamps with the current time.
pub fn apply_transition(order: &Order, to: OrderStatus) -> Result<Order, TransitionError> {
    apply_transition_at(order, to, Utc::now())
}

/// Move `order` to `to` as of `now`.
///
/// The input is never modified; on success a new value is returned with
/// `updated_at` set. `ready_at` and `completed_at` are stamped on first
/// arrival at `Ready` and `Completed` and kept afterwards. A clock reading
/// earlier than `created_at` is raised to `created_at`.
pub fn apply_transition_at(
    order: &Order,
    to: OrderStatus,
    now: DateTime<Utc>,
) -> Result<Order, TransitionError> {
    if !order.status.can_transition_to(to) {
        return Err(TransitionError::InvalidTransition {
            from: order.status,
            to,
        });
    }

    let now = now.max(order.created_at);
    let mut next = order.clone();
    next.status = to;
    next.updated_at = Some(now);

    match to {
        OrderStatus::Ready => {
            next.ready_at.get_or_insert(now);
        }
        OrderStatus::Completed => {
            next.completed_at.get_or_insert(now);
        }
        _ => {}
    }

    Ok(next)
}
