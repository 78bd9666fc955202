use eway_access_code::config::EwayConfig;
use eway_access_code::payments::{
    AccessCodeResultRequest, GatewayRequest, GatewayResponse, ReqwestTransport,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let access_code = std::env::args()
        .nth(1)
        .ok_or("usage: eway-access-code <ACCESS_CODE>")?;

    let config = EwayConfig::from_env()?;
    tracing::info!(
        "Fetching result from {} gateway",
        if config.sandbox { "sandbox" } else { "production" }
    );

    let transport = ReqwestTransport::new()?;
    let response = AccessCodeResultRequest::from_config(&config, access_code)
        .execute(&transport)
        .await?;

    if response.has_errors() {
        for (code, description) in response.errors() {
            tracing::warn!("Gateway reported {}: {}", code, description);
        }
    }

    tracing::info!("Bank success: {}", response.has_bank_success());
    if let Ok(transaction_id) = response.transaction_id() {
        tracing::info!("Transaction ID: {}", transaction_id);
    }
    if let Ok(status) = response.transaction_status() {
        tracing::info!("Transaction status: {}", status);
    }

    Ok(())
}
