// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lavajato car-wash manager.
//!
//! Expected business outcomes (access denial, invalid transitions, bad
//! credentials) are modelled as values in their own crates. This type is
//! reserved for infrastructure failures that callers cannot render as a
//! normal UI state.

use thiserror::Error;

/// The primary infrastructure error type shared across Lavajato crates.
#[derive(Debug, Error)]
pub enum LavajatoError {
    /// Configuration errors (invalid TOML, malformed static tables, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Identity store errors (credential hashing, directory seeding).
    #[error("identity store error: {message}")]
    Identity {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A login or registration rejection, rendered inline by the caller.
///
/// Never raised as a panic: `SessionProvider` turns every variant into a
/// `false` result or a tagged `Err` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Unknown e-mail or wrong password.
    #[error("email or password is incorrect")]
    InvalidCredentials,

    /// Registration with an e-mail that already exists.
    #[error("an account with email `{0}` already exists")]
    EmailTaken(String),

    /// A required form field was left blank.
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    /// Password and confirmation differ.
    #[error("password and confirmation do not match")]
    PasswordMismatch,

    /// Password shorter than the configured minimum.
    #[error("password must have at least {min} characters")]
    WeakPassword { min: usize },

    /// The identity store could not be reached or failed internally.
    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}
