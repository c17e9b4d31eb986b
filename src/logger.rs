use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static file server started");
    println!("Server is running at http://{addr}");
    println!("Serving root: {}", config.site.root);
    println!("Default document: {}", config.site.default_document);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_server_stopped() {
    println!("\nServer stopped.");
}
