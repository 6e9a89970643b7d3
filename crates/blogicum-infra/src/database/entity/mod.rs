//! SeaORM entities and their conversions to the domain types.

pub mod category;
pub mod comment;
pub mod location;
pub mod post;
pub mod user;
