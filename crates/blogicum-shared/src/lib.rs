//! # Blogicum Shared
//!
//! Types shared between the API server and its clients: request form
//! schemas with explicit validation, response DTOs, and the error envelope.

pub mod dto;
pub mod forms;
pub mod response;

pub use response::ErrorResponse;
