// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The route vocabulary and the validated registry of per-route access rules.
//!
//! Permission constraints use OR semantics: a route listing several required
//! permissions is satisfied by holding any one of them.

use lavajato_core::{LavajatoError, Permission, Role};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::AccessError;

/// Title shown for identifiers the registry does not know.
pub const NOT_FOUND_TITLE: &str = "Página não encontrada";

/// Every screen of the application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    Home,
    Customer,
    Tracking,
    Scheduling,
    Login,
    Register,
    EmployeeDashboard,
    EmployeeOrders,
    EmployeeScheduling,
    Messages,
    AdminDashboard,
    AdminUsers,
    AdminEmployees,
    AdminOrders,
    AdminScheduling,
    AdminReports,
    AdminSettings,
    AdminFinancial,
}

impl Route {
    /// The route identifier, e.g. `admin-users`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// URL path the route is served under.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Customer => "/pedido",
            Route::Tracking => "/rastrear",
            Route::Scheduling => "/agendamento",
            Route::Login => "/login",
            Route::Register => "/cadastro",
            Route::EmployeeDashboard => "/funcionario/dashboard",
            Route::EmployeeOrders => "/funcionario/atendimento",
            Route::EmployeeScheduling => "/funcionario/agenda",
            Route::Messages => "/mensagens",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminUsers => "/admin/clientes",
            Route::AdminEmployees => "/admin/funcionarios",
            Route::AdminOrders => "/admin/pedidos",
            Route::AdminScheduling => "/admin/agenda",
            Route::AdminReports => "/admin/relatorios",
            Route::AdminSettings => "/admin/configuracoes",
            Route::AdminFinancial => "/admin/financeiro",
        }
    }

    /// Resolve a URL path back to a route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let normalized = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Route::iter().find(|route| route.path() == normalized)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Navigation section a route is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Main,
    Profile,
    Admin,
}

impl Section {
    /// Group heading shown in navigation menus.
    pub fn label(self) -> &'static str {
        match self {
            Section::Main => "Principal",
            Section::Profile => "Perfil",
            Section::Admin => "Administração",
        }
    }
}

/// Access rules and presentation metadata for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    pub route: Route,
    pub title: &'static str,
    /// Public routes skip every role and permission check.
    pub is_public: bool,
    pub requires_auth: bool,
    /// When declared, the viewer's role must be listed.
    pub allowed_roles: Option<&'static [Role]>,
    /// When declared, holding any one of these permissions suffices.
    pub required_permissions: Option<&'static [Permission]>,
    pub section: Section,
    /// Ascending position in navigation menus.
    pub order: u16,
}

impl RouteConfig {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// Whether the route declares neither a role list nor a permission list.
    pub fn is_unconstrained(&self) -> bool {
        self.allowed_roles.is_none() && self.required_permissions.is_none()
    }
}

const STAFF: &[Role] = &[Role::Employee, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

const fn public(route: Route, title: &'static str, permission: Option<&'static [Permission]>, order: u16) -> RouteConfig {
    RouteConfig {
        route,
        title,
        is_public: true,
        requires_auth: false,
        allowed_roles: None,
        required_permissions: permission,
        section: Section::Main,
        order,
    }
}

const fn private(
    route: Route,
    title: &'static str,
    roles: &'static [Role],
    permissions: &'static [Permission],
    section: Section,
    order: u16,
) -> RouteConfig {
    RouteConfig {
        route,
        title,
        is_public: false,
        requires_auth: true,
        allowed_roles: Some(roles),
        required_permissions: Some(permissions),
        section,
        order,
    }
}

const STANDARD_ROUTES: &[RouteConfig] = &[
    public(Route::Home, "Início", None, 1),
    public(Route::Customer, "Fazer Pedido", Some(&[Permission::CreatePublicOrder]), 2),
    public(Route::Tracking, "Rastrear Pedido", Some(&[Permission::TrackPublicOrder]), 3),
    public(Route::Scheduling, "Agendamento", Some(&[Permission::SchedulePublicAppointment]), 4),
    public(Route::Login, "Login", None, 100),
    public(Route::Register, "Cadastro", None, 101),
    private(Route::EmployeeDashboard, "Dashboard", STAFF, &[Permission::ViewEmployeeDashboard], Section::Main, 20),
    private(Route::EmployeeOrders, "Atendimento", STAFF, &[Permission::ManageOrders], Section::Main, 21),
    private(Route::EmployeeScheduling, "Agenda", STAFF, &[Permission::ViewEmployeeScheduling], Section::Main, 22),
    private(Route::Messages, "Mensagens", STAFF, &[Permission::SendMessages], Section::Main, 23),
    private(Route::AdminDashboard, "Dashboard Admin", ADMIN_ONLY, &[Permission::ViewAdminDashboard], Section::Main, 30),
    private(Route::AdminUsers, "Gerenciar Clientes", ADMIN_ONLY, &[Permission::ManageUsers], Section::Admin, 40),
    private(Route::AdminEmployees, "Gerenciar Funcionários", ADMIN_ONLY, &[Permission::ManageEmployees], Section::Admin, 41),
    private(Route::AdminOrders, "Todos os Pedidos", ADMIN_ONLY, &[Permission::ViewAllOrders], Section::Admin, 42),
    private(Route::AdminScheduling, "Sistema de Agenda", ADMIN_ONLY, &[Permission::ManageScheduling], Section::Admin, 43),
    private(Route::AdminReports, "Relatórios", ADMIN_ONLY, &[Permission::ViewReports], Section::Admin, 44),
    private(Route::AdminSettings, "Configurações", ADMIN_ONLY, &[Permission::ManageSettings], Section::Admin, 46),
    private(Route::AdminFinancial, "Financeiro", ADMIN_ONLY, &[Permission::ViewFinancialData], Section::Admin, 45),
];

/// Validated, immutable table of route configurations.
///
/// Holds exactly one entry per [`Route`], stored in declaration order.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteConfig>,
}

impl RouteRegistry {
    /// The application's built-in route table.
    pub fn standard() -> Result<Self, LavajatoError> {
        Self::from_configs(STANDARD_ROUTES.to_vec())
    }

    /// Build a registry from an arbitrary table, rejecting inconsistent entries.
    ///
    /// All problems are collected into a single [`LavajatoError::Config`].
    pub fn from_configs(configs: Vec<RouteConfig>) -> Result<Self, LavajatoError> {
        let mut problems = Vec::new();
        let mut slots: Vec<Option<RouteConfig>> = vec![None; Route::iter().count()];

        for config in configs {
            if config.is_public && config.allowed_roles.is_some() {
                problems.push(format!("public route `{}` must not declare allowed roles", config.route));
            }
            if config.is_public && config.requires_auth {
                problems.push(format!("public route `{}` must not require authentication", config.route));
            }
            if !config.is_public && !config.requires_auth {
                problems.push(format!("private route `{}` must require authentication", config.route));
            }
            if config.title.trim().is_empty() {
                problems.push(format!("route `{}` has an empty title", config.route));
            }

            let slot = &mut slots[config.route.index()];
            if slot.is_some() {
                problems.push(format!("route `{}` is declared more than once", config.route));
            } else {
                *slot = Some(config);
            }
        }

        for route in Route::iter() {
            if slots[route.index()].is_none() {
                problems.push(format!("route `{route}` is missing from the table"));
            }
        }

        // Menus sort by `order`; two entries at one position would list ambiguously.
        let mut positions: Vec<(u16, Route)> = slots
            .iter()
            .flatten()
            .map(|config| (config.order, config.route))
            .collect();
        positions.sort();
        for pair in positions.windows(2) {
            if pair[0].0 == pair[1].0 {
                problems.push(format!(
                    "menu position {} is shared by `{}` and `{}`",
                    pair[0].0, pair[0].1, pair[1].1
                ));
            }
        }

        if !problems.is_empty() {
            return Err(LavajatoError::Config(format!(
                "invalid route table: {}",
                problems.join("; ")
            )));
        }

        Ok(Self {
            routes: slots.into_iter().flatten().collect(),
        })
    }

    /// Configuration of a known route.
    pub fn get(&self, route: Route) -> &RouteConfig {
        &self.routes[route.index()]
    }

    /// Look up a route by its identifier.
    pub fn config_of(&self, route_id: &str) -> Result<&RouteConfig, AccessError> {
        route_id
            .parse::<Route>()
            .map(|route| self.get(route))
            .map_err(|_| AccessError::RouteNotFound(route_id.to_string()))
    }

    /// Display title, or [`NOT_FOUND_TITLE`] for unknown identifiers.
    pub fn title(&self, route_id: &str) -> &'static str {
        self.config_of(route_id)
            .map(|config| config.title)
            .unwrap_or(NOT_FOUND_TITLE)
    }

    /// Unknown identifiers are not public.
    pub fn is_public(&self, route_id: &str) -> bool {
        self.config_of(route_id).is_ok_and(|config| config.is_public)
    }

    /// Unknown identifiers do not require authentication.
    pub fn requires_auth(&self, route_id: &str) -> bool {
        self.config_of(route_id).is_ok_and(|config| config.requires_auth)
    }

    /// All route configurations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteConfig> {
        self.routes.iter()
    }
}
