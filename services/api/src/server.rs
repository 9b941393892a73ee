use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_leaderboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recognition_board::config::AppConfig;
use recognition_board::error::AppError;
use recognition_board::leaderboard::{BadgeCatalog, LeaderboardService};
use recognition_board::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(BadgeCatalog::standard());
    let badge_count = catalog.len();
    let service = Arc::new(LeaderboardService::new(catalog, config.leaderboard));

    let app = with_leaderboard_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        badge_count,
        page_size = config.leaderboard.page_size,
        "recognition leaderboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
