// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argon2id password hashing.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) carrying their own salt and
//! parameters, so verification needs nothing but the stored string.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use lavajato_core::LavajatoError;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &SecretString) -> Result<String, LavajatoError> {
    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| LavajatoError::Identity {
        message: format!("failed to encode password salt: {e}"),
        source: None,
    })?;

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| LavajatoError::Identity {
            message: format!("Argon2id hashing failed: {e}"),
            source: None,
        })
}

/// Check a password against a stored PHC string.
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &SecretString, phc: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.expose_secret().as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn hash_then_verify() {
        let hash = hash_password(&secret("senha123")).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(&secret("senha123"), &hash));
        assert!(!verify_password(&secret("senha124"), &hash));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password(&secret("admin123")).unwrap();
        let b = hash_password(&secret("admin123")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password(&secret("anything"), "not-a-phc-string"));
        assert!(!verify_password(&secret(""), ""));
    }
}
