use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryStores, SeedData};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pragatipath::config::AppConfig;
use pragatipath::employability::{EmployabilityScoreService, ScoringWeights};
use pragatipath::error::AppError;
use pragatipath::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let stores = InMemoryStores::default();
    if let Some(path) = args.seed.take() {
        let raw = std::fs::read_to_string(&path)?;
        let data: SeedData = serde_json::from_str(&raw)?;
        stores.load(data);
        info!(path = %path.display(), "seed dataset loaded");
    }

    let service = Arc::new(EmployabilityScoreService::new(
        stores.students.clone(),
        stores.certificates.clone(),
        stores.applications.clone(),
        stores.interviews.clone(),
        ScoringWeights::default(),
    ));

    let app = with_operational_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "employability scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
