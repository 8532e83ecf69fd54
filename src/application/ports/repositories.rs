//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::retrieval::BibleVersion;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Version Repository
// ============================================================================

/// 译本实体（用于持久化）
#[derive(Debug, Clone)]
pub struct VersionRecord {
    pub version: BibleVersion,
    pub verse_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Version Repository Port
///
/// 译本目录：用户给出的缩写在这里解析为 `BibleVersion`
#[async_trait]
pub trait VersionRepositoryPort: Send + Sync {
    /// 保存译本（按缩写覆盖）
    async fn save(&self, version: &BibleVersion) -> Result<(), RepositoryError>;

    /// 根据缩写查找译本（大小写不敏感）
    async fn find_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<BibleVersion>, RepositoryError>;

    /// 获取所有译本及其经文数量
    async fn find_all(&self) -> Result<Vec<VersionRecord>, RepositoryError>;

    /// 删除译本及其全部经文
    async fn delete(&self, abbreviation: &str) -> Result<(), RepositoryError>;
}
