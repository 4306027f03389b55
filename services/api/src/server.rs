use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryTriageRepository};
use crate::routes::with_triage_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use triage_desk::config::AppConfig;
use triage_desk::error::AppError;
use triage_desk::telemetry;
use triage_desk::triage::{SequentialTokenGenerator, TriageIntakeService};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryTriageRepository::default());
    let tokens = Arc::new(SequentialTokenGenerator::new(
        config.triage.token_prefix.clone(),
    ));
    let triage_service = Arc::new(
        TriageIntakeService::new(repository, tokens).with_queue_limit(config.triage.queue_limit),
    );

    let app = with_triage_routes(triage_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, token_prefix = %config.triage.token_prefix, "triage desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
