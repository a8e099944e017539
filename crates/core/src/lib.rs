//! Domain layer for the bookshelf service.
//!
//! Holds shared type aliases, the domain error type and request-parameter
//! parsing that does not touch the database or HTTP.

pub mod author_filter;
pub mod error;
pub mod types;
