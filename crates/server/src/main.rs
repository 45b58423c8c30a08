//! zipfold Server - HTTP REST API for postal range reduction
//!
//! This binary serves the zipfold reduction pipeline over REST endpoints.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up .env overrides before reading the environment
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
