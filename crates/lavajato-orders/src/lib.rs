// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order lifecycle for the Lavajato car-wash manager.
//!
//! This crate provides:
//! - **Status machine**: the legal transitions between order statuses
//! - **Lifecycle**: applying a transition to an order and stamping milestones
//! - **Pricing**: the service price table and order totals in centavos
//! - **Order book**: the per-session, in-memory collection of orders
//! - **Dashboard**: counts and revenue figures over an order list

pub mod book;
pub mod dashboard;
pub mod lifecycle;
pub mod order;
pub mod pricing;
pub mod status;

pub use book::{OrderBook, OrderError, DEFAULT_CAR_MODEL};
pub use dashboard::DashboardStats;
pub use lifecycle::{apply_transition, apply_transition_at, TransitionError};
pub use order::{Order, OrderDraft};
pub use pricing::{format_brl, PriceTable, PricingError};
pub use status::{available_transitions, next_status, OrderStatus};
