use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::seed::{default_singers, seed_if_empty};
use service::singers::{repo::mongo::MongoSingerRepository, SingerRepository, SingerService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: connect the store, build the app and run the HTTP server
/// until Ctrl+C, then close the store client.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    // 启动前检查存储连通性；失败则拒绝启动
    let store = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Store(e.to_string()))?;
    info!(service = "server", event = "store_connected", database = %store.database_name(), "document store reachable");

    let repo: Arc<dyn SingerRepository> = Arc::new(MongoSingerRepository::new(&store));
    if cfg.database.seed_on_startup {
        let outcome = seed_if_empty(repo.as_ref(), default_singers())
            .await
            .map_err(|e| StartupError::Store(e.to_string()))?;
        info!(service = "server", event = "seed", ?outcome, "startup seeding finished");
    }

    let state = ServerState::new(SingerService::new(repo));
    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;

    store.shutdown().await;
    info!(service = "server", event = "store_closed", "document store client closed");
    Ok(())
}
