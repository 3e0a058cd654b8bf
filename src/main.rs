mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(
        submission = ?config.page.submission,
        decoration = ?config.page.decoration,
        "page configuration loaded"
    );

    let app = routes::app(config.page.clone()).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "brandview listening");
    axum::serve(listener, app).await.expect("server failed");
}
