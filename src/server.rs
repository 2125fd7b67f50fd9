use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};

use crate::route;

pub struct ServerConfig {
    socket_address: SocketAddr,
}

impl ServerConfig {
    pub fn new(socket_address: SocketAddr) -> Self {
        Self { socket_address }
    }
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Serves until the listener fails. Bind and serve errors are fatal and
    /// propagate to the caller; there is no shutdown path besides killing the
    /// process.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = route::app().layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                    .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                    .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
            ),
        );

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("Server failed")?;

        Ok(())
    }
}
