// src/server/mod.rs

//! Larder HTTP service
//!
//! A thin transport shell over the cookbook core:
//! - parses request bodies into the payload shapes the validator consumes
//! - renders core rejections as status codes plus `{error, message}` bodies
//! - serializes registry access behind one coarse lock, since the core
//!   itself has no isolation discipline (write lock around
//!   validate-and-commit, read lock around queries)

mod handlers;
mod routes;

pub use routes::create_router;

use crate::cookbook::Cookbook;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub cookbook: Cookbook,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            cookbook: Cookbook::new(),
        }
    }
}

/// Run the service until the process is stopped
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
