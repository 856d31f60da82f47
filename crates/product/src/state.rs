use crate::{
    abstract_trait::product::repository::{DynProductCommandRepository, DynProductQueryRepository},
    di::DependenciesInject,
};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::SystemMetrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(pool, &mut registry);

        Self::assemble(di_container, registry)
    }

    pub fn with_repositories(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
    ) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::from_repositories(query, command, &mut registry);

        Self::assemble(di_container, registry)
    }

    fn assemble(di_container: DependenciesInject, mut registry: Registry) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        registry.register_metrics(&system_metrics);

        Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        }
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &SystemMetrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &SystemMetrics) {
        metrics.register(self);
    }
}
