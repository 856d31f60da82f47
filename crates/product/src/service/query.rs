use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::{FindAllProducts, PageRequest},
        response::{PageResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            registry,
            "product_query_service",
            "ProductQueryService",
        );

        Self { query, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-query-service")
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

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
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
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<PageResponse<ProductResponse>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}",
            req.page, req.size
        );

        let method = Method::Get;

        let tracing_ctx = self.start_tracing(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("size", req.size.to_string()),
            ],
        );

        let page_request = PageRequest::from(req);

        let (products, total) = match self.query.find_all(&page_request).await {
            Ok(res) => res,
            Err(e) => {
                let msg = format!("Failed to fetch products: {e:?}");
                self.complete_tracing_error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let content: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products (total: {total})", content.len());
        self.complete_tracing_success(&tracing_ctx, method, "Products retrieved");

        Ok(PageResponse::new(content, req.page, req.size, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let method = Method::Get;

        let tracing_ctx = self.start_tracing(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product_id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete_tracing_success(&tracing_ctx, method, "Product retrieved");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                let msg = format!("Product with id={id} not found");
                self.complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                self.complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
