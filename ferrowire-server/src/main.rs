/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Main entry point for the ferrowire file server.

use ferrowire_server::config::ServerConfig;
use ferrowire_server::handlers::AppState;
use ferrowire_server::routes::create_router;
use ferrowire_store::MemoryRepository;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("starting ferrowire server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState {
        repository: Arc::new(MemoryRepository::new()),
    });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("listening on {}", config.addr());

    axum::serve(listener, router).await?;

    Ok(())
}
