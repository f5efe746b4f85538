//! HTTP API subsystem.
//!
//! # Routes
//! ```text
//! GET /health        → liveness + version
//! GET /config        → ConfigHandler::get_config snapshot (502 on query failure)
//! GET /credits/{id}  → ContractHandler::get_credits (400 on bad id, 502 on failure)
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
