// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lavajato integration tests.
//!
//! # Components
//!
//! - [`TestHarness`] - One visitor's session, route registry, and order book
//! - [`MockIdentityStore`] - Identity store replaying scripted outcomes

pub mod harness;
pub mod mock_store;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_store::{test_user, MockIdentityStore};
