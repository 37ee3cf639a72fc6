mod config;
mod request;
mod runner;
mod server;
mod validation;

use rmcp::{transport::stdio, ServiceExt};

use config::ScannerConfig;
use server::FenjingServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match ScannerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        executable = %config.fenjing_path.display(),
        "fenjing MCP server running on stdio"
    );

    FenjingServer::new(config).serve(stdio()).await?.waiting().await?;
    Ok(())
}
