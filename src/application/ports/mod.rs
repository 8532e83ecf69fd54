//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod verse_store;

pub use repositories::{RepositoryError, VersionRecord, VersionRepositoryPort};
pub use verse_store::{VerseRecord, VerseStorePort};
