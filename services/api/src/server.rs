use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use courier_insights::config::AppConfig;
use courier_insights::deliveries::DatasetCache;
use courier_insights::error::AppError;
use courier_insights::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dataset) = args.dataset.take() {
        config.dataset.path = dataset;
    }

    telemetry::init(&config.telemetry)?;

    let dataset = Arc::new(DatasetCache::new(config.dataset.path.clone()));
    if let Err(err) = dataset.load() {
        warn!(
            path = %config.dataset.path.display(),
            error = %err,
            "delivery dataset unavailable; dashboard requests will fail until it can be read"
        );
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset,
    };

    let app = dashboard_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "courier delivery dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
