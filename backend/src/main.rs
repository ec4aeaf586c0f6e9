use std::net::SocketAddr;

use tracing::{info, Level};

use finance_tracker_backend::storage::CsvConnection;
use finance_tracker_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up data directory");
    let connection = CsvConnection::new_default()?;
    info!("Data directory: {}", connection.base_directory().display());

    let app_state = initialize_backend(connection);
    let app = create_router(app_state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
