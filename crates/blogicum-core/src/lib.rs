//! # Blogicum Core
//!
//! The domain layer of the Blogicum backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the blog entities, the publication visibility rules, pagination, and the
//! repository/auth ports that infrastructure implements.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod visibility;

pub use error::RepoError;
