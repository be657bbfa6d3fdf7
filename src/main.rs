use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use user_directory::config::Config;
use user_directory::http;
use user_directory::lifecycle::{tracing::setup_tracing, UserSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::parse();

    let system = UserSystem::new(config.buffer_size);
    let app = http::router(system.user_client.clone());

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    // The router owns a client clone; serve must return before the actor can stop.
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl-C"),
                Err(e) => error!(error = %e, "Could not listen for Ctrl-C, shutting down"),
            }
        })
        .await?;

    system.shutdown().await?;
    Ok(())
}
