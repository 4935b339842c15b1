use crate::{
    abstract_trait::{DynNavigationRepository, NavigationServiceTrait},
    model::{NavigationEntry, PageId, Role},
};

/// Entries whose role set contains `role`, in registry order.
pub fn visible_entries<'a, I>(role: Role, registry: I) -> Vec<NavigationEntry>
where
    I: IntoIterator<Item = &'a NavigationEntry>,
{
    registry
        .into_iter()
        .filter(|entry| entry.permits(role))
        .copied()
        .collect()
}

/// `requested` when some entry for it admits `role`, otherwise the default page.
/// A page with no registry entry is treated as not permitted.
pub fn change_page<'a, I>(requested: PageId, role: Role, registry: I) -> PageId
where
    I: IntoIterator<Item = &'a NavigationEntry>,
{
    if registry
        .into_iter()
        .any(|entry| entry.page == requested && entry.permits(role))
    {
        requested
    } else {
        PageId::DEFAULT
    }
}

#[derive(Clone)]
pub struct NavigationService {
    repository: DynNavigationRepository,
}

impl NavigationService {
    pub fn new(repository: DynNavigationRepository) -> Self {
        Self { repository }
    }

    fn routes(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.repository
            .sidebar()
            .iter()
            .chain(self.repository.account().iter())
    }
}

impl NavigationServiceTrait for NavigationService {
    fn sidebar_entries(&self, role: Role) -> Vec<NavigationEntry> {
        visible_entries(role, self.repository.sidebar())
    }

    fn account_entries(&self, role: Role) -> Vec<NavigationEntry> {
        visible_entries(role, self.repository.account())
    }

    fn is_permitted(&self, page: PageId, role: Role) -> bool {
        self.routes()
            .any(|entry| entry.page == page && entry.permits(role))
    }

    fn change_page(&self, requested: PageId, role: Role) -> PageId {
        change_page(requested, role, self.routes())
    }
}
