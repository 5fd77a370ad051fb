//! Local storage module for ViviLog
//!
//! Provides SQLite-based persistence for animals and their husbandry
//! records. Everything stays on the keeper's machine; there is no remote
//! backend.

mod database;
mod error;
mod repository;

pub use database::Database;
pub use error::StorageError;
pub use repository::ArchiveData;
