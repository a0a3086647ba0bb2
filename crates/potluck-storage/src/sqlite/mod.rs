//! SQLite-backed store implementation.

mod rows;
pub mod schema;
mod store;

pub use store::SqliteStore;
