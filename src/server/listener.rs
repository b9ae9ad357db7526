use tokio::net::TcpListener;
use tracing::{Instrument, info, info_span};

use crate::app::Processor;
use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, Processor::from_config(cfg)).await
}

/// Accept loop. Every connection gets a clone of `processor`, so all of them
/// share one session store.
pub async fn serve(listener: TcpListener, processor: Processor) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let processor = processor.clone();
        let span = info_span!("connection", %peer);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, processor);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            }
            .instrument(span),
        );
    }
}
