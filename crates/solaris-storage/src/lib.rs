//! Solaris Storage crate - SQLite persistence for the Solar System catalog.
//!
//! Provides a WAL-mode SQLite database with migrations, the reference
//! catalog seed, and the `CatalogRepository` implementation of
//! `CatalogGateway`.

pub mod db;
pub mod migrations;
pub mod repository;
pub mod seed;

pub use db::Database;
pub use repository::CatalogRepository;
pub use seed::seed_if_empty;
