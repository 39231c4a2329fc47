//! # Blogroll API Server
//!
//! Actix-web application: configuration, state, extractors and routes. The
//! binary in `main.rs` wires these together; integration tests build the same
//! app against in-memory storage.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
