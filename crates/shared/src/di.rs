use crate::{
    abstract_trait::{DynNavigationRepository, DynNavigationService, DynSessionService},
    repository::{NavigationRepository, RegistryDefect},
    service::{NavigationService, SessionService},
    utils::Metrics,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub navigation_repository: DynNavigationRepository,
    pub navigation_service: DynNavigationService,
    pub metrics: Metrics,
    defects: Vec<RegistryDefect>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("navigation_repository", &"<NavigationRepository>")
            .field("navigation_service", &"<NavigationService>")
            .field("defects", &self.defects)
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub repository: NavigationRepository,
    pub metrics: Metrics,
}

impl Default for DependenciesInjectDeps {
    fn default() -> Self {
        Self {
            repository: NavigationRepository::new(),
            metrics: Metrics::new(),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            repository,
            metrics,
        } = deps;

        metrics.register(registry);

        let defects = repository.validate();
        let navigation_repository = Arc::new(repository) as DynNavigationRepository;
        let navigation_service = Arc::new(NavigationService::new(navigation_repository.clone()))
            as DynNavigationService;

        Self {
            navigation_repository,
            navigation_service,
            metrics,
            defects,
        }
    }

    /// Defects found in the navigation registry at construction time.
    pub fn registry_defects(&self) -> &[RegistryDefect] {
        &self.defects
    }

    /// A fresh, logged-out session holder wired to the shared navigation service.
    pub fn session_service(&self) -> DynSessionService {
        Box::new(SessionService::new(
            self.navigation_service.clone(),
            self.metrics.clone(),
        ))
    }
}
