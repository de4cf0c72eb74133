// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles one visitor's complete stack: a session provider,
//! the route registry, and an order book priced from the configuration.

use std::sync::Arc;

use lavajato_access::{resolve, RouteDecision, RouteRegistry, Viewer};
use lavajato_auth::{SessionProvider, DEMO_ACCOUNTS};
use lavajato_config::LavajatoConfig;
use lavajato_core::{IdentityStore, LavajatoError, LoginCredentials, Role};
use lavajato_orders::OrderBook;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: LavajatoConfig,
    store: Option<Arc<dyn IdentityStore>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: LavajatoConfig::default(),
            store: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: LavajatoConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a simulated delay to every login and registration.
    pub fn with_latency(mut self, millis: u64) -> Self {
        self.config.auth.simulated_latency_ms = millis;
        self
    }

    /// Start with an empty directory.
    pub fn without_demo_users(mut self) -> Self {
        self.config.auth.seed_demo_users = false;
        self
    }

    /// Use a custom identity store instead of the in-memory directory.
    pub fn with_store(mut self, store: Arc<dyn IdentityStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub fn build(self) -> Result<TestHarness, LavajatoError> {
        let session = match self.store {
            Some(store) => SessionProvider::with_config(store, &self.config.auth),
            None => SessionProvider::from_config(&self.config.auth)?,
        };

        Ok(TestHarness {
            session,
            registry: RouteRegistry::standard()?,
            orders: OrderBook::from_config(&self.config),
            config: self.config,
        })
    }
}

/// A complete single-session test environment.
pub struct TestHarness {
    /// Session provider (demo accounts seeded by default).
    pub session: SessionProvider,
    /// The standard route registry.
    pub registry: RouteRegistry,
    /// Order book for this session.
    pub orders: OrderBook,
    /// Lavajato configuration.
    pub config: LavajatoConfig,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Sign in with the demo account holding `role`.
    ///
    /// Returns `false` for roles without a demo account (public).
    pub async fn login_as(&self, role: Role) -> bool {
        match DEMO_ACCOUNTS.iter().find(|account| account.role == role) {
            Some(account) => {
                self.session
                    .login(LoginCredentials::new(account.email, account.password))
                    .await
            }
            None => false,
        }
    }

    /// The current session as the route guard sees it.
    pub async fn viewer(&self) -> Viewer {
        self.session.session().await.viewer()
    }

    /// Request a route by identifier as the current viewer.
    pub async fn visit(&self, route_id: &str) -> RouteDecision {
        let viewer = self.viewer().await;
        resolve(&self.registry, route_id, &viewer)
    }
}
