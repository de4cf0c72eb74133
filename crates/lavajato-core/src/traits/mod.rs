// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the core and its external collaborators.
//!
//! Implementations use `#[async_trait]` for dynamic dispatch compatibility.

pub mod identity;

pub use identity::IdentityStore;
