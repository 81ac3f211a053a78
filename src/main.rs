use log::{error, info};

use lumi_gateway::{ChatGateway, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = GatewayConfig::from_env().map_err(|e| {
      error!("{}", e);
      e
    })?;
    let gateway = ChatGateway::new(&config)?;
    info!(
      "Starting lumi-gateway on {} (live: {})",
      config.bind_addr, gateway.is_live()
    );

    let app = lumi_gateway::server::router(gateway);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    info!("lumi-gateway stopped");
    Ok(())
}
