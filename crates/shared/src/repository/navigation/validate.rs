use crate::model::{NavigationEntry, PageId};
use std::{collections::HashSet, fmt};

/// Configuration mistake found in a navigation registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryDefect {
    EmptyRoleSet(PageId),
    DuplicatePage(PageId),
}

impl fmt::Display for RegistryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryDefect::EmptyRoleSet(page) => {
                write!(f, "entry '{page}' is not visible to any role")
            }
            RegistryDefect::DuplicatePage(page) => {
                write!(f, "page '{page}' is registered more than once")
            }
        }
    }
}

/// Startup check over the combined registry. Resolution never calls this;
/// a defective registry only degrades to empty menus and dashboard fallbacks.
pub fn validate_registry<'a, I>(entries: I) -> Vec<RegistryDefect>
where
    I: IntoIterator<Item = &'a NavigationEntry>,
{
    let mut seen = HashSet::new();
    let mut defects = Vec::new();

    for entry in entries {
        if entry.roles.is_empty() {
            defects.push(RegistryDefect::EmptyRoleSet(entry.page));
        }
        if !seen.insert(entry.page) {
            defects.push(RegistryDefect::DuplicatePage(entry.page));
        }
    }

    defects
}
