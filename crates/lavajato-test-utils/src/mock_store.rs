// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted identity store for deterministic testing.
//!
//! `MockIdentityStore` implements `IdentityStore` with a queue of
//! pre-configured outcomes and records the e-mail of every call.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lavajato_access::permissions_for;
use lavajato_core::{AuthFailure, IdentityStore, LoginCredentials, RegisterData, Role, User, UserId};
use tokio::sync::Mutex;

/// An identity store that replays scripted outcomes.
///
/// Outcomes are popped from a FIFO queue shared by `authenticate` and
/// `register`. When the queue is empty every call is rejected with
/// [`AuthFailure::InvalidCredentials`].
pub struct MockIdentityStore {
    outcomes: Arc<Mutex<VecDeque<Result<User, AuthFailure>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockIdentityStore {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<Result<User, AuthFailure>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an outcome to the end of the queue.
    pub async fn push_outcome(&self, outcome: Result<User, AuthFailure>) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// E-mail addresses seen so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn next_outcome(&self, email: &str) -> Result<User, AuthFailure> {
        self.calls.lock().await.push(email.to_string());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(AuthFailure::InvalidCredentials))
    }
}

impl Default for MockIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
    fn name(&self) -> &str {
        "mock-store"
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, AuthFailure> {
        self.next_outcome(&credentials.email).await
    }

    async fn register(&self, data: &RegisterData) -> Result<User, AuthFailure> {
        self.next_outcome(&data.email).await
    }
}

/// A user with the role's catalog permissions, for scripting outcomes.
pub fn test_user(role: Role) -> User {
    User {
        id: UserId(format!("test-{role}")),
        name: format!("Test {role}"),
        email: format!("{role}@test.local"),
        phone: "11900000000".to_string(),
        role,
        permissions: permissions_for(role),
        created_at: Utc::now(),
    }
}
