//! Harbor - minimal HTTP/1.1 server
//!
//! Hand-rolled request parsing and response writing on top of raw tokio
//! sockets, with echo, user-agent and file routes.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
