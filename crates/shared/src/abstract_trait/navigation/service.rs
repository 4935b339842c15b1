use crate::model::{NavigationEntry, PageId, Role};
use std::sync::Arc;

pub type DynNavigationService = Arc<dyn NavigationServiceTrait + Send + Sync>;

pub trait NavigationServiceTrait {
    fn sidebar_entries(&self, role: Role) -> Vec<NavigationEntry>;
    fn account_entries(&self, role: Role) -> Vec<NavigationEntry>;
    fn is_permitted(&self, page: PageId, role: Role) -> bool;
    fn change_page(&self, requested: PageId, role: Role) -> PageId;
}
