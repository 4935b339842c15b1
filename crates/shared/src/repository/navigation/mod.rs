mod registry;
mod validate;

pub use self::registry::{ACCOUNT_MENU, SIDEBAR_MENU};
pub use self::validate::{RegistryDefect, validate_registry};

use crate::{abstract_trait::NavigationRepositoryTrait, model::NavigationEntry};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NavigationRepository {
    sidebar: Vec<NavigationEntry>,
    account: Vec<NavigationEntry>,
}

impl Default for NavigationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationRepository {
    pub fn new() -> Self {
        Self::with_entries(SIDEBAR_MENU.to_vec(), ACCOUNT_MENU.to_vec())
    }

    pub fn with_entries(sidebar: Vec<NavigationEntry>, account: Vec<NavigationEntry>) -> Self {
        debug!(
            "Navigation registry loaded: {} sidebar, {} account entries",
            sidebar.len(),
            account.len()
        );
        Self { sidebar, account }
    }

    pub fn validate(&self) -> Vec<RegistryDefect> {
        validate_registry(self.sidebar.iter().chain(self.account.iter()))
    }
}

impl NavigationRepositoryTrait for NavigationRepository {
    fn sidebar(&self) -> &[NavigationEntry] {
        &self.sidebar
    }

    fn account(&self) -> &[NavigationEntry] {
        &self.account
    }
}
