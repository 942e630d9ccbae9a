use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections forever.
///
/// The bound port is printed to stdout as `Listening on port <N>`; with the
/// default configuration the OS picks the port, so this line is the only way
/// to learn it.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    println!("Listening on port {}", listener.local_addr()?.port());

    serve(listener, cfg.clone()).await
}

/// Accepts and serves connections one at a time.
///
/// Each connection is served to completion before the next accept; a slow or
/// silent client stalls the loop. Errors from accept or from serving
/// propagate and end the loop.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, cfg.index_file.clone());
        conn.run().await?;
    }
}
