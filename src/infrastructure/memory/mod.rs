//! Memory Layer - In-Memory Storage
//!
//! 实现 VerseStore 与 VersionRepository 的内存版本

mod verse_store;

pub use verse_store::InMemoryVerseStore;
