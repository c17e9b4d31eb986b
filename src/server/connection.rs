// Connection handling module
// Serves a single accepted TCP connection in its own task

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 connection settings (keep-alive, timeouts)
/// 3. Serves the connection with the request handler
/// 4. Applies a whole-connection timeout
///
/// Spawning per connection keeps a slow file read on one connection from
/// stalling the others.
pub fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        // Read performance configuration
        let keep_alive_timeout = config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            config.performance.read_timeout,
            config.performance.write_timeout,
        ));

        // Build HTTP/1 connection; hyper enables keep-alive by default,
        // so a zero timeout must switch it off explicitly
        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive_timeout > 0);

        // Serve connection
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let config_clone = Arc::clone(&config);
                async move { handler::handle_request(req, config_clone).await }
            }),
        );

        // Apply timeout and handle result
        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection timeout after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}
