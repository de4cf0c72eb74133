// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-filtered navigation menus.

use lavajato_core::{PermissionSet, Role};
use strum::IntoEnumIterator;

use crate::routes::{Route, RouteConfig, RouteRegistry, Section};

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
    pub section: Section,
    pub order: u16,
    pub is_public: bool,
}

impl From<&RouteConfig> for NavigationItem {
    fn from(config: &RouteConfig) -> Self {
        Self {
            route: config.route,
            label: config.title,
            path: config.path(),
            section: config.section,
            order: config.order,
            is_public: config.is_public,
        }
    }
}

/// Items of one section, under its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGroup {
    pub section: Section,
    pub label: &'static str,
    pub items: Vec<NavigationItem>,
}

fn is_visible(config: &RouteConfig, role: Role, permissions: &PermissionSet) -> bool {
    if config.is_public {
        // Signed-in viewers no longer need the entry points.
        let entry_point = matches!(config.route, Route::Login | Route::Register);
        return !(entry_point && role != Role::Public);
    }

    if let Some(roles) = config.allowed_roles {
        if !roles.contains(&role) {
            return false;
        }
    }

    config
        .required_permissions
        .is_none_or(|required| permissions.intersects(required))
}

/// Menu entries visible to the viewer, sorted by ascending `order`.
pub fn visible_items(
    registry: &RouteRegistry,
    role: Role,
    permissions: &PermissionSet,
) -> Vec<NavigationItem> {
    let mut items: Vec<NavigationItem> = registry
        .iter()
        .filter(|config| is_visible(config, role, permissions))
        .map(NavigationItem::from)
        .collect();
    items.sort_by_key(|item| item.order);
    items
}

/// Visible items partitioned by section: main, profile, admin. Empty
/// sections are left out.
pub fn groups(
    registry: &RouteRegistry,
    role: Role,
    permissions: &PermissionSet,
) -> Vec<NavigationGroup> {
    let items = visible_items(registry, role, permissions);

    Section::iter()
        .filter_map(|section| {
            let members: Vec<NavigationItem> = items
                .iter()
                .filter(|item| item.section == section)
                .copied()
                .collect();
            (!members.is_empty()).then(|| NavigationGroup {
                section,
                label: section.label(),
                items: members,
            })
        })
        .collect()
}
