use crate::model::{PageId, Role, RoleSet};
use serde::Serialize;

/// Where an entry is rendered: the left sidebar or the header account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    Sidebar,
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
    pub roles: RoleSet,
    pub section: MenuSection,
}

impl NavigationEntry {
    pub const fn sidebar(page: PageId, label: &'static str, icon: &'static str, roles: &[Role]) -> Self {
        NavigationEntry {
            page,
            label,
            icon,
            roles: RoleSet::of(roles),
            section: MenuSection::Sidebar,
        }
    }

    pub const fn account(page: PageId, label: &'static str, icon: &'static str) -> Self {
        NavigationEntry {
            page,
            label,
            icon,
            roles: RoleSet::ALL,
            section: MenuSection::Account,
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}
