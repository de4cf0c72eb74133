// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory identity directory with Argon2id-hashed passwords.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use lavajato_access::permissions_for;
use lavajato_core::{
    AuthFailure, IdentityStore, LavajatoError, LoginCredentials, RegisterData, Role, User, UserId,
};
use secrecy::SecretString;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::password::{hash_password, verify_password};

/// A seeded demo account.
pub struct DemoAccount {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Accounts available out of the box for demonstrations.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "2",
        name: "Maria Funcionária",
        email: "funcionario@lava-jato.com",
        phone: "11987654322",
        password: "senha123",
        role: Role::Employee,
    },
    DemoAccount {
        id: "3",
        name: "Carlos Admin",
        email: "admin@lava-jato.com",
        phone: "11987654323",
        password: "admin123",
        role: Role::Admin,
    },
];

struct Account {
    user: User,
    password_hash: String,
}

/// Account store held in process memory. Lost on exit.
///
/// E-mail addresses are matched case-insensitively after trimming.
pub struct InMemoryDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl InMemoryDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// A directory holding the [`DEMO_ACCOUNTS`].
    pub fn with_demo_accounts() -> Result<Self, LavajatoError> {
        let mut accounts = HashMap::new();
        for demo in DEMO_ACCOUNTS {
            let password_hash = hash_password(&SecretString::from(demo.password.to_string()))?;
            let user = User {
                id: UserId(demo.id.to_string()),
                name: demo.name.to_string(),
                email: demo.email.to_string(),
                phone: demo.phone.to_string(),
                role: demo.role,
                permissions: permissions_for(demo.role),
                created_at: Utc::now(),
            };
            accounts.insert(normalize_email(demo.email), Account { user, password_hash });
        }
        debug!(accounts = accounts.len(), "seeded demo accounts");
        Ok(Self {
            accounts: RwLock::new(accounts),
        })
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.accounts
            .read()
            .await
            .get(&normalize_email(email))
            .map(|account| account.user.clone())
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityStore for InMemoryDirectory {
    fn name(&self) -> &str {
        "in-memory"
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, AuthFailure> {
        let accounts = self.accounts.read().await;
        match accounts.get(&normalize_email(&credentials.email)) {
            Some(account) if verify_password(&credentials.password, &account.password_hash) => {
                Ok(account.user.clone())
            }
            _ => Err(AuthFailure::InvalidCredentials),
        }
    }

    /// New accounts are created with the employee role.
    async fn register(&self, data: &RegisterData) -> Result<User, AuthFailure> {
        let key = normalize_email(&data.email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(AuthFailure::EmailTaken(data.email.trim().to_string()));
        }

        let password_hash =
            hash_password(&data.password).map_err(|e| AuthFailure::Unavailable(e.to_string()))?;
        let role = Role::Employee;
        let user = User {
            id: UserId(uuid::Uuid::new_v4().to_string()),
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            role,
            permissions: permissions_for(role),
            created_at: Utc::now(),
        };

        info!(user_id = user.id.0.as_str(), "account created");
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }
}
