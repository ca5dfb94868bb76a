#![forbid(unsafe_code)]

//! Persistence adapters for quiz progress: the repository contract, an
//! in-memory backend, and a `SQLite` backend.

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, ProgressRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
