// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lavajato car-wash manager.
//!
//! This crate provides the foundational types (roles, permissions, users),
//! the shared error taxonomy, and the identity-store trait used throughout
//! the Lavajato workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AuthFailure, LavajatoError};
pub use traits::IdentityStore;
pub use types::{
    LoginCredentials, OrderId, Permission, PermissionSet, RegisterData, Role, User, UserId,
};

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::ExposeSecret;
    use strum::IntoEnumIterator;

    #[test]
    fn lavajato_error_has_all_variants() {
        let _config = LavajatoError::Config("test".into());
        let _identity = LavajatoError::Identity {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = LavajatoError::Internal("test".into());
    }

    #[test]
    fn roles_are_ordered_by_trust() {
        assert!(Role::Public < Role::Employee);
        assert!(Role::Employee < Role::Admin);
        assert_eq!(Role::default(), Role::Public);
    }

    #[test]
    fn role_display_and_from_str_round_trip() {
        use std::str::FromStr;

        for role in Role::iter() {
            let parsed = Role::from_str(&role.to_string()).expect("should parse back");
            assert_eq!(role, parsed);
        }
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("guest").is_err());
    }

    #[test]
    fn permission_has_fifteen_variants() {
        assert_eq!(Permission::iter().count(), 15);
        assert_eq!(Permission::ManageUsers.to_string(), "MANAGE_USERS");
    }

    #[test]
    fn permission_serialization_uses_upper_snake_case() {
        let json = serde_json::to_string(&Permission::ViewFinancialData).unwrap();
        assert_eq!(json, "\"VIEW_FINANCIAL_DATA\"");
        let parsed: Permission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Permission::ViewFinancialData);
    }

    #[test]
    fn permission_set_intersects_is_logical_or() {
        let set = PermissionSet::from([Permission::ManageOrders]);
        assert!(set.intersects(&[Permission::ViewReports, Permission::ManageOrders]));
        assert!(!set.intersects(&[Permission::ViewReports]));
        assert!(!set.intersects(&[]));
    }

    #[test]
    fn permission_set_superset() {
        let small = PermissionSet::from([Permission::TrackPublicOrder]);
        let big = PermissionSet::from([Permission::TrackPublicOrder, Permission::SendMessages]);
        assert!(big.is_superset(&small));
        assert!(!small.is_superset(&big));
        assert_eq!(big.len(), 2);
        assert!(PermissionSet::new().is_empty());
    }

    #[test]
    fn order_id_display_and_parse() {
        let id = OrderId::from("#12");
        assert_eq!(id, OrderId("12".into()));
        assert_eq!(id.to_string(), "#12");
    }

    #[test]
    fn credentials_debug_does_not_leak_password() {
        let creds = LoginCredentials::new("a@b.com", "hunter2");
        assert_eq!(creds.password.expose_secret(), "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn identity_store_is_object_safe() {
        fn _assert_object_safe(_: &dyn IdentityStore) {}
    }
}
