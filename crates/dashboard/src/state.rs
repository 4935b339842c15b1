use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynSessionService,
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    errors::ServiceError,
    repository::NavigationRepository,
    utils::Metrics,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub session: Arc<Mutex<DynSessionService>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("session", &"<dyn SessionService>")
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_repository(config, NavigationRepository::new())
    }

    pub fn with_repository(config: &Config, repository: NavigationRepository) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(
            DependenciesInjectDeps {
                repository,
                metrics: Metrics::new(),
            },
            &mut registry,
        );

        let defects = di_container.registry_defects();
        for defect in defects {
            warn!("Navigation registry defect: {defect}");
        }
        if config.strict_registry && !defects.is_empty() {
            return Err(ServiceError::InvalidRegistry(
                defects.iter().map(ToString::to_string).collect(),
            )
            .into());
        }

        info!("Initializing session holder");
        let session = Arc::new(Mutex::new(di_container.session_service()));

        Ok(Self {
            di_container,
            session,
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}
