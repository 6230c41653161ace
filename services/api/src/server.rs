use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vida_insights::config::AppConfig;
use vida_insights::error::AppError;
use vida_insights::recommendations::RecommendationEngine;
use vida_insights::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(config.catalog.path.as_deref())?);
    let engine = Arc::new(RecommendationEngine::new(config.recommendations.clone()));

    let app = with_catalog_routes(catalog.clone(), engine.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        articles = catalog.len(),
        jitter = %engine.config().jitter,
        limit = engine.config().max_results,
        "article recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
