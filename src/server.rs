use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::handlers::ws::{ws_state, AppState};
use crate::state::handle::ArenaHandle;
use crate::utils::config::Config;

/// Start the websocket server and serve until it fails
pub async fn start_server(config: &Config, arena: ArenaHandle) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState { arena }, config);

    let listener = TcpListener::bind(&config.addr).await?;
    info!("Websocket server listening on {}", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(app_state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/state", get(ws_state))
        .layer(cors_layer(config))
        .with_state(app_state)
}

/// CORS policy from configuration: `*` is permissive, anything else is
/// the single allowed origin
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]),
        Err(e) => {
            log::warn!("Invalid CORS origin {:?} ({}), denying cross-origin requests", config.cors_origin, e);
            CorsLayer::new()
        }
    }
}
