// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login, registration and logout for one session.
//!
//! The session lock is held for the whole of a login or registration call,
//! so concurrent calls on one provider run one after another. While a call
//! is in flight [`SessionProvider::is_busy`] reports `true`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lavajato_config::model::AuthConfig;
use lavajato_core::{
    AuthFailure, IdentityStore, LavajatoError, LoginCredentials, RegisterData, Role, User,
};
use secrecy::ExposeSecret;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::directory::InMemoryDirectory;
use crate::session::Session;

/// Clears the busy flag when the call finishes, however it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns one visitor's [`Session`] and talks to the identity store.
pub struct SessionProvider {
    store: Arc<dyn IdentityStore>,
    session: Mutex<Session>,
    busy: AtomicBool,
    min_password_length: usize,
    latency: Duration,
}

impl SessionProvider {
    /// Provider with a six-character password minimum and no added latency.
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self::with_config(store, &AuthConfig::default())
    }

    pub fn with_config(store: Arc<dyn IdentityStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            session: Mutex::new(Session::anonymous()),
            busy: AtomicBool::new(false),
            min_password_length: config.min_password_length,
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Provider backed by an [`InMemoryDirectory`], seeded when configured.
    pub fn from_config(config: &AuthConfig) -> Result<Self, LavajatoError> {
        let directory = if config.seed_demo_users {
            InMemoryDirectory::with_demo_accounts()?
        } else {
            InMemoryDirectory::new()
        };
        Ok(Self::with_config(Arc::new(directory), config))
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Whether a login or registration is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Snapshot of the session.
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn current(&self) -> Option<User> {
        self.session.lock().await.user().cloned()
    }

    pub async fn role(&self) -> Role {
        self.session.lock().await.role()
    }

    /// Sign in. On failure the session is left as it was.
    pub async fn try_login(&self, credentials: LoginCredentials) -> Result<User, AuthFailure> {
        let mut session = self.session.lock().await;
        let _busy = BusyGuard::enter(&self.busy);

        if credentials.email.trim().is_empty() {
            return Err(AuthFailure::MissingField("email"));
        }
        if credentials.password.expose_secret().is_empty() {
            return Err(AuthFailure::MissingField("password"));
        }

        self.simulate_latency().await;

        match self.store.authenticate(&credentials).await {
            Ok(user) => {
                info!(user_id = user.id.0.as_str(), role = %user.role, "login succeeded");
                session.replace(user.clone());
                Ok(user)
            }
            Err(AuthFailure::Unavailable(detail)) => {
                warn!(store = self.store.name(), error = detail.as_str(), "identity store failed during login");
                Err(AuthFailure::Unavailable(detail))
            }
            Err(failure) => {
                info!(error = %failure, "login rejected");
                Err(failure)
            }
        }
    }

    /// [`try_login`](Self::try_login), reduced to success or failure.
    pub async fn login(&self, credentials: LoginCredentials) -> bool {
        self.try_login(credentials).await.is_ok()
    }

    /// Create an account and sign in as it.
    ///
    /// Form checks run first: blank fields, then confirmation mismatch, then
    /// password length. On failure the session is left as it was.
    pub async fn try_register(&self, data: RegisterData) -> Result<User, AuthFailure> {
        let mut session = self.session.lock().await;
        let _busy = BusyGuard::enter(&self.busy);

        self.validate_registration(&data)?;
        self.simulate_latency().await;

        match self.store.register(&data).await {
            Ok(user) => {
                info!(user_id = user.id.0.as_str(), role = %user.role, "registration succeeded");
                session.replace(user.clone());
                Ok(user)
            }
            Err(AuthFailure::Unavailable(detail)) => {
                warn!(store = self.store.name(), error = detail.as_str(), "identity store failed during registration");
                Err(AuthFailure::Unavailable(detail))
            }
            Err(failure) => {
                info!(error = %failure, "registration rejected");
                Err(failure)
            }
        }
    }

    /// [`try_register`](Self::try_register), reduced to success or failure.
    pub async fn register(&self, data: RegisterData) -> bool {
        self.try_register(data).await.is_ok()
    }

    /// Sign out. Returns the user that was signed in, if any.
    pub async fn logout(&self) -> Option<User> {
        let previous = self.session.lock().await.clear();
        if let Some(user) = &previous {
            info!(user_id = user.id.0.as_str(), "logged out");
        }
        previous
    }

    fn validate_registration(&self, data: &RegisterData) -> Result<(), AuthFailure> {
        let required = [
            ("name", data.name.as_str()),
            ("email", data.email.as_str()),
            ("phone", data.phone.as_str()),
            ("password", data.password.expose_secret()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AuthFailure::MissingField(*field));
        }

        let password = data.password.expose_secret();
        if password != data.confirm_password.expose_secret() {
            return Err(AuthFailure::PasswordMismatch);
        }
        if password.chars().count() < self.min_password_length {
            return Err(AuthFailure::WeakPassword {
                min: self.min_password_length,
            });
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tracing_test::traced_test;

    fn provider() -> SessionProvider {
        SessionProvider::from_config(&AuthConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn login_sets_the_session() {
        let provider = provider();
        assert!(provider.login(LoginCredentials::new("admin@lava-jato.com", "admin123")).await);
        assert_eq!(provider.role().await, Role::Admin);
        assert!(provider.session().await.is_authenticated());
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_login_keeps_session_public() {
        let provider = provider();
        let result = provider
            .try_login(LoginCredentials::new("admin@x.com", "wrong"))
            .await;
        assert_eq!(result, Err(AuthFailure::InvalidCredentials));
        assert_eq!(provider.role().await, Role::Public);
        assert_eq!(provider.current().await, None);
        assert!(logs_contain("login rejected"));
    }

    #[tokio::test]
    async fn failed_login_keeps_previous_user() {
        let provider = provider();
        assert!(provider.login(LoginCredentials::new("funcionario@lava-jato.com", "senha123")).await);
        assert!(!provider.login(LoginCredentials::new("admin@lava-jato.com", "nope")).await);
        assert_eq!(provider.role().await, Role::Employee);
    }

    #[tokio::test]
    async fn blank_login_fields_are_reported() {
        let provider = provider();
        assert_eq!(
            provider.try_login(LoginCredentials::new(" ", "x")).await,
            Err(AuthFailure::MissingField("email"))
        );
        assert_eq!(
            provider.try_login(LoginCredentials::new("a@b.c", "")).await,
            Err(AuthFailure::MissingField("password"))
        );
    }

    #[tokio::test]
    async fn logout_returns_to_public() {
        let provider = provider();
        provider.login(LoginCredentials::new("admin@lava-jato.com", "admin123")).await;
        let previous = provider.logout().await;
        assert_eq!(previous.map(|u| u.role), Some(Role::Admin));
        assert_eq!(provider.role().await, Role::Public);
        assert!(provider.logout().await.is_none());
    }

    #[tokio::test]
    async fn register_signs_in_as_employee() {
        let provider = provider();
        let user = provider
            .try_register(RegisterData::new("Ana", "ana@example.com", "11900000000", "segredo", "segredo"))
            .await
            .unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(provider.current().await, Some(user));
    }

    #[tokio::test]
    async fn registration_form_checks_run_in_order() {
        let provider = provider();
        let cases = [
            (RegisterData::new("", "a@b.c", "1", "abcdef", "abcdef"), AuthFailure::MissingField("name")),
            (RegisterData::new("Ana", "a@b.c", " ", "abcdef", "abcdef"), AuthFailure::MissingField("phone")),
            (RegisterData::new("Ana", "a@b.c", "1", "abc", "abd"), AuthFailure::PasswordMismatch),
            (RegisterData::new("Ana", "a@b.c", "1", "abc", "abc"), AuthFailure::WeakPassword { min: 6 }),
        ];
        for (data, expected) in cases {
            assert_eq!(provider.try_register(data).await, Err(expected));
        }
        assert_eq!(provider.role().await, Role::Public);
    }

    #[tokio::test]
    async fn duplicate_registration_fails() {
        let provider = provider();
        assert!(
            !provider
                .register(RegisterData::new("X", "admin@lava-jato.com", "1", "abcdef", "abcdef"))
                .await
        );
        assert_eq!(provider.role().await, Role::Public);
    }

    struct BrokenStore;

    #[async_trait]
    impl IdentityStore for BrokenStore {
        fn name(&self) -> &str {
            "broken"
        }

        async fn authenticate(&self, _: &LoginCredentials) -> Result<User, AuthFailure> {
            Err(AuthFailure::Unavailable("connection refused".to_string()))
        }

        async fn register(&self, _: &RegisterData) -> Result<User, AuthFailure> {
            Err(AuthFailure::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn store_failure_is_a_failed_attempt() {
        let provider = SessionProvider::new(Arc::new(BrokenStore));
        assert!(!provider.login(LoginCredentials::new("admin@lava-jato.com", "admin123")).await);
        assert_eq!(provider.role().await, Role::Public);
        assert!(logs_contain("identity store failed during login"));
    }

    #[tokio::test(start_paused = true)]
    async fn busy_while_login_is_in_flight() {
        let config = AuthConfig {
            simulated_latency_ms: 1000,
            ..AuthConfig::default()
        };
        let provider = Arc::new(SessionProvider::from_config(&config).unwrap());
        assert!(!provider.is_busy());

        let task = {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move {
                provider
                    .login(LoginCredentials::new("admin@lava-jato.com", "admin123"))
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(provider.is_busy());

        assert!(task.await.unwrap());
        assert!(!provider.is_busy());
        assert_eq!(provider.role().await, Role::Admin);
    }
}
