use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use user_rpc::{shutdown_signal, RpcServer, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let config = ServiceConfig::from_env()?;
    let server = RpcServer::new(config.env_name.clone());

    server
        .serve(config.port, shutdown_signal())
        .await
        .wrap_err_with(|| format!("failed to serve on port {}", config.port))?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
