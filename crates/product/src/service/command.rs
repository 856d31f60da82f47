use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{requests::CreateProductRequest, response::ProductResponse},
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

pub const DUPLICATE_NAME_MESSAGE: &str = "product with this name already exists";

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            registry,
            "product_command_service",
            "ProductCommandService",
        );

        Self { command, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-command-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let (status_str, status) = if is_success {
            ("SUCCESS", StatusUtils::Success)
        } else {
            ("ERROR", StatusUtils::Error)
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let entity = req.to_entity();

        info!("🏗️ Creating product: {}", entity.name);

        let method = Method::Post;

        let tracing_ctx = self.start_tracing(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", entity.name.clone()),
            ],
        );

        match self.command.save(&entity).await {
            Ok(product) => {
                self.complete_tracing(&tracing_ctx, method, true, "Product created");
                Ok(ProductResponse::from(product))
            }
            Err(RepositoryError::AlreadyExists(constraint)) => {
                let msg = format!("Duplicate product name '{}' ({constraint})", entity.name);
                self.complete_tracing(&tracing_ctx, method, false, &msg);
                Err(ServiceError::field("name", DUPLICATE_NAME_MESSAGE))
            }
            Err(e) => {
                let msg = format!("Failed to create product '{}': {e:?}", entity.name);
                self.complete_tracing(&tracing_ctx, method, false, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
