pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;

use axum::middleware;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let server = &config.server;

    if !server.dist_path().join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html yet, run `trunk build` in crates/frontend",
            server.dist_path().display()
        );
    }

    let app = routes::configure_routes(server)
        .layer(middleware::from_fn(system::middleware::request_logger));

    let addr: SocketAddr = server.bind_address().parse()?;
    tracing::info!("Serving {} on http://{}", server.dist_dir, addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Stop the other process or set PORT.",
                    server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
