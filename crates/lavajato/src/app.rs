// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application context shared by the CLI commands and the shell.
//!
//! One `App` is one visitor: it owns the session, the order book and the
//! route the visitor is currently looking at. Every order operation is
//! guarded by the route that exposes it in the web front-end.

use chrono::Utc;
use lavajato_access::{
    accessible_routes, authorize, breadcrumbs, default_route_for, groups, has_admin_access,
    has_employee_access, resolve, AccessError, Breadcrumb, NavigationGroup, Route, RouteDecision,
    RouteRegistry, Viewer,
};
use lavajato_auth::SessionProvider;
use lavajato_config::LavajatoConfig;
use lavajato_core::{AuthFailure, LavajatoError, LoginCredentials, OrderId, User};
use lavajato_orders::{
    DashboardStats, Order, OrderBook, OrderDraft, OrderError, OrderStatus, PricingError,
};
use thiserror::Error;
use tracing::debug;

/// A command the visitor issued could not be carried out.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Setup(#[from] LavajatoError),
}

pub struct App {
    pub config: LavajatoConfig,
    pub registry: RouteRegistry,
    pub session: SessionProvider,
    pub orders: OrderBook,
    current: Route,
}

impl App {
    /// Wire the registry, the identity directory and the order book from
    /// configuration.
    pub fn new(config: LavajatoConfig) -> Result<Self, LavajatoError> {
        Ok(Self {
            registry: RouteRegistry::standard()?,
            session: SessionProvider::from_config(&config.auth)?,
            orders: OrderBook::from_config(&config),
            current: Route::Home,
            config,
        })
    }

    /// The route the visitor is on.
    pub fn current_route(&self) -> Route {
        self.current
    }

    pub async fn viewer(&self) -> Viewer {
        self.session.session().await.viewer()
    }

    /// Request a route by identifier or URL path; the visitor ends up
    /// wherever the guard sends them.
    pub async fn navigate(&mut self, requested: &str) -> RouteDecision {
        let viewer = self.viewer().await;
        let requested = Route::from_path(requested).map_or(requested, |route| route.as_str());
        let decision = resolve(&self.registry, requested, &viewer);
        self.current = decision.target();
        decision
    }

    /// Breadcrumb trail of the current route.
    pub fn trail(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.registry, self.current)
    }

    /// Every route the current session may open.
    pub async fn reachable(&self) -> Vec<Route> {
        let viewer = self.viewer().await;
        accessible_routes(&self.registry, viewer.role, Some(&viewer.permissions))
    }

    /// Whether the order-desk commands are open to the current session.
    pub async fn desk_enabled(&self) -> bool {
        has_employee_access(self.session.role().await)
    }

    /// Navigation menu for the current session.
    pub async fn menu(&self) -> Vec<NavigationGroup> {
        let viewer = self.viewer().await;
        groups(&self.registry, viewer.role, &viewer.permissions)
    }

    /// Sign in and land on the role's default route.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .session
            .try_login(LoginCredentials::new(email, password))
            .await?;
        self.current = default_route_for(user.role);
        Ok(user)
    }

    pub async fn logout(&mut self) -> Option<User> {
        self.current = Route::Home;
        self.session.logout().await
    }

    async fn require(&self, route: Route) -> Result<(), AppError> {
        let viewer = self.viewer().await;
        authorize(&self.registry, route.as_str(), &viewer)?;
        Ok(())
    }

    /// Place an order through the public order form.
    pub async fn place_order(&mut self, draft: OrderDraft) -> Result<Order, AppError> {
        self.require(Route::Customer).await?;
        Ok(self.orders.submit(draft)?.clone())
    }

    /// Look an order up the way the public tracking screen does.
    pub async fn track(&self, id: &OrderId) -> Result<(Order, String), AppError> {
        self.require(Route::Tracking).await?;
        let order = self
            .orders
            .get(id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;
        Ok((order.clone(), order.tracking_message(self.orders.prices())))
    }

    /// Orders on the service desk, optionally filtered by status.
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, AppError> {
        self.require(Route::EmployeeOrders).await?;
        let orders = match status {
            Some(status) => self.orders.list_by_status(status).into_iter().cloned().collect(),
            None => self.orders.list().to_vec(),
        };
        Ok(orders)
    }

    pub async fn advance(&mut self, id: &OrderId) -> Result<Order, AppError> {
        self.require(Route::EmployeeOrders).await?;
        Ok(self.orders.advance(id)?.clone())
    }

    pub async fn set_status(&mut self, id: &OrderId, to: OrderStatus) -> Result<Order, AppError> {
        self.require(Route::EmployeeOrders).await?;
        Ok(self.orders.update_status(id, to)?.clone())
    }

    pub async fn delete(&mut self, id: &OrderId) -> Result<Order, AppError> {
        self.require(Route::EmployeeOrders).await?;
        Ok(self.orders.delete(id)?)
    }

    /// Dashboard figures, through the admin dashboard when the role has
    /// one and the employee dashboard otherwise.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let role = self.session.role().await;
        let screen = if has_admin_access(role) {
            Route::AdminDashboard
        } else {
            Route::EmployeeDashboard
        };
        debug!(role = %role, screen = %screen, "opening dashboard");
        self.require(screen).await?;
        Ok(DashboardStats::compute_with_limit(
            self.orders.list(),
            Utc::now(),
            self.config.orders.recent_limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(LavajatoConfig::default()).unwrap()
    }

    fn draft() -> OrderDraft {
        OrderDraft::new("Ana", "11999990000", "simple")
    }

    #[tokio::test]
    async fn starts_on_home_signed_out() {
        let app = app();
        assert_eq!(app.current_route(), Route::Home);
        assert!(!app.viewer().await.authenticated);
    }

    #[tokio::test]
    async fn login_lands_on_role_dashboard() {
        let mut app = app();
        let user = app.login("admin@lava-jato.com", "admin123").await.unwrap();
        assert_eq!(user.name, "Carlos Admin");
        assert_eq!(app.current_route(), Route::AdminDashboard);

        app.logout().await;
        assert_eq!(app.current_route(), Route::Home);
    }

    #[tokio::test]
    async fn failed_login_keeps_route() {
        let mut app = app();
        app.navigate("tracking").await;
        let err = app.login("admin@lava-jato.com", "nope").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthFailure::InvalidCredentials)));
        assert_eq!(app.current_route(), Route::Tracking);
    }

    #[tokio::test]
    async fn navigate_follows_guard_target() {
        let mut app = app();
        let decision = app.navigate("admin-users").await;
        assert_eq!(decision, RouteDecision::LoginRequired { route: Route::AdminUsers });
        assert_eq!(app.current_route(), Route::Login);
    }

    #[tokio::test]
    async fn navigate_accepts_url_paths() {
        let mut app = app();
        assert_eq!(app.navigate("/rastrear").await, RouteDecision::Allowed(Route::Tracking));
        assert_eq!(app.current_route(), Route::Tracking);
        assert_eq!(app.navigate("/rastrear/").await, RouteDecision::Allowed(Route::Tracking));

        assert_eq!(
            app.navigate("/admin/clientes").await,
            RouteDecision::LoginRequired { route: Route::AdminUsers }
        );

        app.login("admin@lava-jato.com", "admin123").await.unwrap();
        assert_eq!(
            app.navigate("/admin/clientes").await,
            RouteDecision::Allowed(Route::AdminUsers)
        );
        assert!(matches!(
            app.navigate("/admin/nada").await,
            RouteDecision::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn trail_follows_current_route() {
        let mut app = app();
        let labels = |app: &App| -> Vec<&'static str> {
            app.trail().iter().map(|crumb| crumb.label).collect()
        };
        assert_eq!(labels(&app), vec!["Início"]);

        app.login("admin@lava-jato.com", "admin123").await.unwrap();
        app.navigate("/admin/financeiro").await;
        assert_eq!(labels(&app), vec!["Início", "Administração", "Financeiro"]);
    }

    #[tokio::test]
    async fn reachable_routes_and_desk_follow_role() {
        let mut app = app();
        assert!(!app.desk_enabled().await);
        let public = app.reachable().await;
        assert!(public.contains(&Route::Tracking));
        assert!(!public.contains(&Route::EmployeeOrders));

        app.login("funcionario@lava-jato.com", "senha123").await.unwrap();
        assert!(app.desk_enabled().await);
        let employee = app.reachable().await;
        assert!(employee.contains(&Route::EmployeeOrders));
        assert!(!employee.contains(&Route::AdminFinancial));
    }

    #[tokio::test]
    async fn public_visitor_can_order_and_track() {
        let mut app = app();
        let order = app.place_order(draft()).await.unwrap();
        let (tracked, message) = app.track(&order.id).await.unwrap();
        assert_eq!(tracked.id, order.id);
        assert!(message.starts_with("Tempo estimado"));
    }

    #[tokio::test]
    async fn desk_operations_need_staff() {
        let mut app = app();
        let order = app.place_order(draft()).await.unwrap();

        let err = app.advance(&order.id).await.unwrap_err();
        assert!(matches!(err, AppError::Access(AccessError::AccessDenied { .. })));
        assert!(app.list_orders(None).await.is_err());

        app.login("funcionario@lava-jato.com", "senha123").await.unwrap();
        let advanced = app.advance(&order.id).await.unwrap();
        assert_eq!(advanced.status, OrderStatus::Waiting);
        assert_eq!(app.list_orders(Some(OrderStatus::Waiting)).await.unwrap().len(), 1);

        let deleted = app.delete(&order.id).await.unwrap();
        assert_eq!(deleted.id, order.id);
        assert!(app.list_orders(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dashboard_open_to_employee_and_admin() {
        let mut app = app();
        assert!(app.dashboard().await.is_err());

        app.login("funcionario@lava-jato.com", "senha123").await.unwrap();
        assert_eq!(app.dashboard().await.unwrap().total_orders, 0);

        app.logout().await;
        app.login("admin@lava-jato.com", "admin123").await.unwrap();
        app.place_order(draft()).await.unwrap();
        assert_eq!(app.dashboard().await.unwrap().total_orders, 1);
    }

    #[tokio::test]
    async fn illegal_status_change_is_reported() {
        let mut app = app();
        let order = app.place_order(draft()).await.unwrap();
        app.login("funcionario@lava-jato.com", "senha123").await.unwrap();
        let err = app.set_status(&order.id, OrderStatus::Completed).await.unwrap_err();
        assert!(matches!(err, AppError::Order(OrderError::Transition(_))));
    }
}
