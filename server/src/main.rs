mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("server configuration");
    let state = state::AppState::new(config);
    let port = state.config.port;

    let app = routes::app(state).expect("router assembly");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gulfgate listening");
    axum::serve(listener, app).await.expect("server failed");
}
