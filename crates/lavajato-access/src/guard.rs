// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route guarding: what to render when a viewer requests a route.
//!
//! [`resolve`] returns the redirect decision a front-end acts on;
//! [`authorize`] is the same check in `Result` form.

use lavajato_core::{PermissionSet, Role, User};
use tracing::{debug, info};

use crate::catalog::permissions_for;
use crate::error::AccessError;
use crate::evaluator::{can_access, default_route_for};
use crate::routes::{Route, RouteRegistry};

/// Who is asking for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub role: Role,
    pub permissions: PermissionSet,
    pub authenticated: bool,
}

impl Viewer {
    /// A visitor without a session.
    pub fn anonymous() -> Self {
        Self {
            role: Role::Public,
            permissions: permissions_for(Role::Public),
            authenticated: false,
        }
    }

    /// A signed-in user, carrying the user's own permission set.
    pub fn from_user(user: &User) -> Self {
        Self {
            role: user.role,
            permissions: user.permissions.clone(),
            authenticated: true,
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Outcome of guarding a route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the route.
    Allowed(Route),
    /// The route needs a session; send the viewer to the login screen.
    LoginRequired { route: Route },
    /// Render the access-denied view, offering `fallback`.
    AccessDenied { route: Route, fallback: Route },
    /// The identifier names no route.
    NotFound { requested: String },
}

impl RouteDecision {
    /// The route a front-end should end up on.
    pub fn target(&self) -> Route {
        match self {
            RouteDecision::Allowed(route) => *route,
            RouteDecision::LoginRequired { .. } => Route::Login,
            RouteDecision::AccessDenied { fallback, .. } => *fallback,
            RouteDecision::NotFound { .. } => Route::Home,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allowed(_))
    }
}

/// Guard a route request.
pub fn resolve(registry: &RouteRegistry, requested: &str, viewer: &Viewer) -> RouteDecision {
    let config = match registry.config_of(requested) {
        Ok(config) => config,
        Err(_) => {
            debug!(requested, "route not found");
            return RouteDecision::NotFound {
                requested: requested.to_string(),
            };
        }
    };
    let route = config.route;

    if config.requires_auth && !viewer.authenticated {
        info!(route = %route, "login required");
        return RouteDecision::LoginRequired { route };
    }

    if !can_access(registry, viewer.role, route, Some(&viewer.permissions)) {
        let fallback = default_route_for(viewer.role);
        info!(route = %route, role = %viewer.role, fallback = %fallback, "access denied");
        return RouteDecision::AccessDenied { route, fallback };
    }

    debug!(route = %route, role = %viewer.role, "access granted");
    RouteDecision::Allowed(route)
}

/// Guard a route request, reporting refusals as [`AccessError`].
///
/// A missing session is reported as `AccessDenied` for the viewer's role.
pub fn authorize(
    registry: &RouteRegistry,
    requested: &str,
    viewer: &Viewer,
) -> Result<Route, AccessError> {
    match resolve(registry, requested, viewer) {
        RouteDecision::Allowed(route) => Ok(route),
        RouteDecision::LoginRequired { route } | RouteDecision::AccessDenied { route, .. } => {
            Err(AccessError::AccessDenied {
                route,
                role: viewer.role,
            })
        }
        RouteDecision::NotFound { requested } => Err(AccessError::RouteNotFound(requested)),
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: &'static str,
    /// `None` for headings that are not routes themselves.
    pub route: Option<Route>,
}

/// Breadcrumb trail for a route: home, then the area heading, then the route.
pub fn breadcrumbs(registry: &RouteRegistry, route: Route) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb {
        label: registry.get(Route::Home).title,
        route: Some(Route::Home),
    }];

    if route == Route::Home {
        return trail;
    }

    let id = route.as_str();
    if id.starts_with("admin-") {
        trail.push(Breadcrumb {
            label: "Administração",
            route: None,
        });
    } else if id.starts_with("employee-") {
        trail.push(Breadcrumb {
            label: "Funcionário",
            route: None,
        });
    }

    trail.push(Breadcrumb {
        label: registry.get(route).title,
        route: Some(route),
    });
    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn registry() -> RouteRegistry {
        RouteRegistry::standard().unwrap()
    }

    fn signed_in(role: Role) -> Viewer {
        Viewer {
            role,
            permissions: permissions_for(role),
            authenticated: true,
        }
    }

    #[test]
    #[traced_test]
    fn anonymous_viewer_is_sent_to_login() {
        let decision = resolve(&registry(), "admin-dashboard", &Viewer::anonymous());
        assert_eq!(
            decision,
            RouteDecision::LoginRequired {
                route: Route::AdminDashboard
            }
        );
        assert_eq!(decision.target(), Route::Login);
        assert!(logs_contain("login required"));
    }

    #[test]
    #[traced_test]
    fn employee_denied_admin_falls_back_to_own_dashboard() {
        let decision = resolve(&registry(), "admin-users", &signed_in(Role::Employee));
        assert_eq!(
            decision,
            RouteDecision::AccessDenied {
                route: Route::AdminUsers,
                fallback: Route::EmployeeDashboard,
            }
        );
        assert!(logs_contain("access denied"));
    }

    #[test]
    fn public_routes_are_allowed_without_session() {
        let decision = resolve(&registry(), "tracking", &Viewer::anonymous());
        assert_eq!(decision, RouteDecision::Allowed(Route::Tracking));
        assert!(decision.is_allowed());
    }

    #[test]
    fn unknown_route_is_not_found() {
        let decision = resolve(&registry(), "backstage", &signed_in(Role::Admin));
        assert_eq!(
            decision,
            RouteDecision::NotFound {
                requested: "backstage".to_string()
            }
        );
        assert_eq!(decision.target(), Route::Home);
    }

    #[test]
    fn authorize_reports_tagged_errors() {
        let registry = registry();
        assert_eq!(
            authorize(&registry, "admin-dashboard", &Viewer::anonymous()),
            Err(AccessError::AccessDenied {
                route: Route::AdminDashboard,
                role: Role::Public,
            })
        );
        assert_eq!(
            authorize(&registry, "backstage", &Viewer::anonymous()),
            Err(AccessError::RouteNotFound("backstage".to_string()))
        );
        assert_eq!(
            authorize(&registry, "admin-financial", &signed_in(Role::Admin)),
            Ok(Route::AdminFinancial)
        );
    }

    #[test]
    fn viewer_permissions_are_honoured() {
        let viewer = Viewer {
            role: Role::Admin,
            permissions: PermissionSet::new(),
            authenticated: true,
        };
        let decision = resolve(&registry(), "admin-reports", &viewer);
        assert_eq!(decision.target(), Route::AdminDashboard);
    }

    #[test]
    fn breadcrumbs_for_each_area() {
        let registry = registry();
        let labels = |route| {
            breadcrumbs(&registry, route)
                .into_iter()
                .map(|b| b.label)
                .collect::<Vec<_>>()
        };

        assert_eq!(labels(Route::Home), vec!["Início"]);
        assert_eq!(labels(Route::Tracking), vec!["Início", "Rastrear Pedido"]);
        assert_eq!(
            labels(Route::AdminUsers),
            vec!["Início", "Administração", "Gerenciar Clientes"]
        );
        assert_eq!(
            labels(Route::EmployeeOrders),
            vec!["Início", "Funcionário", "Atendimento"]
        );
    }
}
