use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::files::{DiskStore, FileStore};
use crate::http::connection::Connection;
use crate::http::router::Router;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    if let Some(dir) = &cfg.directory {
        info!("Serving files from {}", dir.display());
    }

    let router = Arc::new(Router::from_config(cfg, Arc::new(DiskStore)));
    serve(listener, router).await
}

/// Accept loop. Each connection runs in its own task; a failed accept is
/// logged and the loop carries on.
pub async fn serve<S: FileStore>(
    listener: TcpListener,
    router: Arc<Router<S>>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
