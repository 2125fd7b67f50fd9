use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use test_server::server::{Server, ServerConfig};

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,test_server=trace,tower_http=trace");
    }

    init_tracing()?;

    tracing::info!("Starting ...");

    let socket_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080);

    let server_config = ServerConfig::new(socket_address);
    let server = Server::new(server_config);

    server.run().await?;

    Ok(())
}
