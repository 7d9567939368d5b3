// src/rest_server.rs
use std::error::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{AppState, build_router};
use crate::application::ChoiceStore;

/// 全インターフェースの固定ポートで待ち受ける
pub const BIND_ADDR: &str = "0.0.0.0:8000";

pub struct RestServer {
    addr: String,
    store: ChoiceStore,
}

impl RestServer {
    pub fn new(addr: &str, store: ChoiceStore) -> Self {
        RestServer {
            addr: addr.to_string(),
            store,
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let listener = TcpListener::bind(&self.addr).await?;
        info!(addr = %self.addr, store = %self.store.path().display(), "REST server started");

        let app = build_router(AppState::new(self.store));
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("REST server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
