use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool));

        Self::from_repositories(product_query_repo, product_command_repo, registry)
    }

    /// Wires the services over any repository implementation.
    pub fn from_repositories(
        product_query_repo: DynProductQueryRepository,
        product_command_repo: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo, registry));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo, registry));

        Self {
            product_query,
            product_command,
        }
    }
}
