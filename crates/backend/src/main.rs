pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let state = shared::state::AppState::from_config(&config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut app = routes::configure_routes(state);

    // Статика сайта для всех путей вне API
    if let Some(static_dir) = &config.server.static_dir {
        let static_dir = shared::config::resolve_path(static_dir);
        tracing::info!("Serving static files from: {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    let app = app
        .layer(cors)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;
    tracing::info!("Catalog server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
