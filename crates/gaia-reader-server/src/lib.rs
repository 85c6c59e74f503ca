//! HTTP layer for the Gaia read-path resolver.
//!
//! Exposes the resolver over HEAD requests: a present object answers 200
//! with its effective `Content-Type`, an absent one 404, and a failed
//! primary probe 500. Object bytes are never served; this layer relays
//! resolution outcomes only.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::ReaderServer;
