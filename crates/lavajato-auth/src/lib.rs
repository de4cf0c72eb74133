// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sessions and identities for the Lavajato car-wash manager.
//!
//! A [`SessionProvider`] owns one visitor's [`Session`] and signs users in
//! against an [`IdentityStore`](lavajato_core::IdentityStore). The bundled
//! [`InMemoryDirectory`] keeps Argon2id password hashes in memory and can
//! be seeded with demo accounts.

pub mod directory;
pub mod password;
pub mod provider;
pub mod session;

pub use directory::{DemoAccount, InMemoryDirectory, DEMO_ACCOUNTS};
pub use provider::SessionProvider;
pub use session::Session;
