// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The signed-in state of one visitor.

use lavajato_access::{permissions_for, Viewer};
use lavajato_core::{PermissionSet, Role, User};

/// The current user, if any. No user means the public role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Public, |u| u.role)
    }

    /// The user's own permissions, or the public set when signed out.
    pub fn permissions(&self) -> PermissionSet {
        match &self.user {
            Some(user) => user.permissions.clone(),
            None => permissions_for(Role::Public),
        }
    }

    /// The session as seen by the route guard.
    pub fn viewer(&self) -> Viewer {
        match &self.user {
            Some(user) => Viewer::from_user(user),
            None => Viewer::anonymous(),
        }
    }

    pub(crate) fn replace(&mut self, user: User) -> Option<User> {
        self.user.replace(user)
    }

    pub(crate) fn clear(&mut self) -> Option<User> {
        self.user.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lavajato_core::UserId;

    fn admin() -> User {
        User {
            id: UserId("3".to_string()),
            name: "Carlos Admin".to_string(),
            email: "admin@lava-jato.com".to_string(),
            phone: "11987654323".to_string(),
            role: Role::Admin,
            permissions: permissions_for(Role::Admin),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn anonymous_session_is_public() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), Role::Public);
        assert_eq!(session.permissions(), permissions_for(Role::Public));
        assert_eq!(session.viewer(), Viewer::anonymous());
    }

    #[test]
    fn signed_in_session_carries_user() {
        let session = Session::signed_in(admin());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Role::Admin);
        assert!(session.viewer().authenticated);
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Carlos Admin"));
    }

    #[test]
    fn clear_returns_previous_user() {
        let mut session = Session::signed_in(admin());
        assert!(session.clear().is_some());
        assert_eq!(session, Session::anonymous());
        assert!(session.clear().is_none());
    }
}
