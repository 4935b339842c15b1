use serde::Serialize;
use shared::model::{NavigationEntry, PageId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemResponse {
    pub id: PageId,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

impl MenuItemResponse {
    pub fn from_entry(entry: &NavigationEntry, current_page: PageId) -> Self {
        MenuItemResponse {
            id: entry.page,
            label: entry.label,
            icon: entry.icon,
            active: entry.page == current_page,
        }
    }
}
