// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-based access control and route authorization for Lavajato.
//!
//! This crate provides:
//! - [`catalog`]: the static role-to-permission mapping
//! - [`RouteRegistry`]: the validated table of routes and their access rules
//! - [`evaluator`]: pure `can_access` decisions and per-role default routes
//! - [`navigation`]: role-filtered, ordered, sectioned menus
//! - [`guard`]: redirect decisions and breadcrumbs for route requests

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod navigation;
pub mod routes;

pub use catalog::{has_admin_access, has_employee_access, permissions_for};
pub use error::AccessError;
pub use evaluator::{accessible_routes, can_access, can_access_id, default_route_for, requires_login};
pub use guard::{authorize, breadcrumbs, resolve, Breadcrumb, RouteDecision, Viewer};
pub use navigation::{groups, visible_items, NavigationGroup, NavigationItem};
pub use routes::{Route, RouteConfig, RouteRegistry, Section, NOT_FOUND_TITLE};
