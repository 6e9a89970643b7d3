//! HTTP middleware: authentication extractors, error rendering, request IDs.

pub mod auth;
pub mod error;
pub mod request_id;

pub use request_id::RequestIdMiddleware;
