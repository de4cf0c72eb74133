// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tagged access failures returned to callers that prefer `Result` over `bool`.

use lavajato_core::Role;
use thiserror::Error;

use crate::routes::Route;

/// An expected access outcome, rendered by the caller (never a panic).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The viewer's role or permissions do not admit the route.
    #[error("role `{role}` may not access route `{route}`")]
    AccessDenied { route: Route, role: Role },

    /// The identifier does not name any route in the registry.
    #[error("route `{0}` not found")]
    RouteNotFound(String),
}
