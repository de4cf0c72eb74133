// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure access decisions over the route registry.

use lavajato_core::{PermissionSet, Role};
use strum::IntoEnumIterator;

use crate::catalog::permissions_for;
use crate::routes::{Route, RouteConfig, RouteRegistry};

/// Decide whether `role` may open `route`.
///
/// Evaluation order: public routes always pass; a declared role list must
/// contain `role`; declared permissions pass if `permissions` holds any of
/// them; a private route with neither constraint admits any authenticated
/// role. `None` permissions means the role's catalog set.
pub fn can_access(
    registry: &RouteRegistry,
    role: Role,
    route: Route,
    permissions: Option<&PermissionSet>,
) -> bool {
    evaluate(registry.get(route), role, permissions)
}

/// As [`can_access`], for a raw identifier. Unknown identifiers are denied.
pub fn can_access_id(
    registry: &RouteRegistry,
    role: Role,
    route_id: &str,
    permissions: Option<&PermissionSet>,
) -> bool {
    registry
        .config_of(route_id)
        .is_ok_and(|config| evaluate(config, role, permissions))
}

fn evaluate(config: &RouteConfig, role: Role, permissions: Option<&PermissionSet>) -> bool {
    if config.is_public {
        return true;
    }

    if let Some(roles) = config.allowed_roles {
        if !roles.contains(&role) {
            return false;
        }
    }

    match config.required_permissions {
        Some(required) => match permissions {
            Some(held) => held.intersects(required),
            None => permissions_for(role).intersects(required),
        },
        None => role != Role::Public,
    }
}

/// Landing route after login, or when access to another route is denied.
pub fn default_route_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Employee => Route::EmployeeDashboard,
        Role::Public => Route::Home,
    }
}

/// Whether opening `route` needs an authenticated session.
pub fn requires_login(registry: &RouteRegistry, route: Route) -> bool {
    registry.get(route).requires_auth
}

/// Every route the viewer may open, in registry order.
pub fn accessible_routes(
    registry: &RouteRegistry,
    role: Role,
    permissions: Option<&PermissionSet>,
) -> Vec<Route> {
    Route::iter()
        .filter(|route| can_access(registry, role, *route, permissions))
        .collect()
}
