//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod verse_repo;
mod version_repo;

pub use database::*;
pub use verse_repo::*;
pub use version_repo::*;
