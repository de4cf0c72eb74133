// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity store trait consumed by the session provider.

use async_trait::async_trait;

use crate::error::AuthFailure;
use crate::types::{LoginCredentials, RegisterData, User};

/// A store of user accounts able to verify credentials and create accounts.
///
/// Rejections (wrong password, duplicate e-mail) are returned as
/// [`AuthFailure`] values. Transport-level problems map to
/// [`AuthFailure::Unavailable`], which the session layer reports as a
/// failed attempt.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Returns the human-readable name of this store.
    fn name(&self) -> &str;

    /// Verifies the credentials and returns the matching account.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, AuthFailure>;

    /// Creates a new account from the registration form.
    async fn register(&self, data: &RegisterData) -> Result<User, AuthFailure>;
}
