use anyhow::Context;
use tokio::net::TcpListener;
use voicetoken::{secrets::Secrets, CONFIG};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Intitialize environment and logger
    dotenv::dotenv().ok();
    env_logger::init();

    // Load the secrets
    let secrets = Secrets::from_env();
    if let Err(e) = secrets.credentials() {
        log::warn!("Token requests will fail until configured: {e}");
    }

    // Initialize the TCP listener
    log::info!(
        "Connecting to the server at {}",
        CONFIG.settings.local_address
    );
    let tcp = TcpListener::bind(CONFIG.settings.local_address)
        .await
        .context("Failed to connect to the server")?;

    // Start the webserver
    log::info!("Starting the webserver");
    axum::serve(tcp, voicetoken::app(secrets).into_make_service())
        .await
        .context("Failed to start the server")
}
