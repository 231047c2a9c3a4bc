// Service exports
pub mod sqlite;

pub use sqlite::{SqliteStorage, StorageError};
