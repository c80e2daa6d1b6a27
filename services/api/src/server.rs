use crate::cli::ServeArgs;
use crate::infra::{
    discovery_config, vendor_repository, AppState, InMemoryBookingNotifier, InMemoryPlanStore,
};
use crate::routes::with_planning_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use event_ai::config::AppConfig;
use event_ai::error::AppError;
use event_ai::telemetry;
use event_ai::workflows::planning::{CategoryPolicy, EventPlanningService};
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let vendors = Arc::new(vendor_repository(&config.planner)?);
    let plans = Arc::new(InMemoryPlanStore::default());
    let bookings = Arc::new(InMemoryBookingNotifier::default());
    let planning_service = Arc::new(EventPlanningService::new(
        vendors,
        plans,
        bookings,
        discovery_config(&config.planner),
        CategoryPolicy::standard(),
    ));

    let app = with_planning_routes(planning_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "agentic event orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
