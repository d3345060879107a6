use anyhow::{Context, Result};
use todo_server::config::Config;
use todo_server::{app, server};
use todo_store::{Repository, SledStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;

    let store = SledStore::open(&config.store_path, &config.collection)
        .with_context(|| format!("failed to open record store at {}", config.store_path))?;
    let repo = Repository::new(store);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "todo server listening");

    server::serve(listener, app(repo)).await
}
