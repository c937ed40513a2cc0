use axum::http::StatusCode;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let status = match std::env::var("MOCK_STATUS") {
        Ok(raw) => StatusCode::from_u16(raw.parse()?)?,
        Err(_) => StatusCode::OK,
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, status = status.as_u16(), "listening");
    mock_server::run(listener, mock_server::MockState::new(status)).await?;
    Ok(())
}
