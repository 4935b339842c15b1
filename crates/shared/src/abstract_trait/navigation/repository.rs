use crate::model::NavigationEntry;
use std::sync::Arc;

pub type DynNavigationRepository = Arc<dyn NavigationRepositoryTrait + Send + Sync>;

pub trait NavigationRepositoryTrait {
    /// Sidebar entries in on-screen order.
    fn sidebar(&self) -> &[NavigationEntry];
    /// Header account menu entries in on-screen order.
    fn account(&self) -> &[NavigationEntry];
}
