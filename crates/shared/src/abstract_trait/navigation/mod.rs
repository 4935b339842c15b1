mod repository;
mod service;

pub use self::repository::{DynNavigationRepository, NavigationRepositoryTrait};
pub use self::service::{DynNavigationService, NavigationServiceTrait};
