// Server module entry point
// Listener creation, connection handling and the accept loop

pub mod connection;
pub mod listener;

// `loop` is a keyword and cannot be a module name; map loop.rs manually
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::run;
