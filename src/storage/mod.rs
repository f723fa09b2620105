//! Storage module for the local database and the offline activity cache.

pub mod activity_cache;
pub mod database;
pub mod schema;

pub use activity_cache::{ActivityCache, ActivityRecord};
pub use database::{Database, DatabaseError};
