// Server loop module
// Accepts connections until interrupted

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::Config;
use crate::logger;

/// Run the accept loop until Ctrl+C.
///
/// Accept errors are logged and the loop continues; a failed accept only
/// affects that one connection attempt.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_server_stopped();
                return Ok(());
            }
        }
    }
}
