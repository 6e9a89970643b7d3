//! # Blogicum API Server
//!
//! The actix-web HTTP layer: configuration, shared state, middleware, and
//! the request handlers. Exposed as a library so integration tests can
//! build the application the same way `main` does.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
