//! Repository structs providing database access for each entity.
//!
//! Each repository is a zero-sized struct with async methods that take
//! a `&PgPool` as the first argument.

pub mod author_repo;

pub use author_repo::AuthorRepo;
