use tokio::net::TcpListener;
use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server::telemetry::init_tracing();
    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "server starting");
    todo_server::run(listener).await?;
    Ok(())
}
