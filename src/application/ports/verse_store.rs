//! Verse Store Port - 经文存储协作方
//!
//! 检索计划的每一步对应这里的一次调用；核心不解释存储错误，
//! 只把它当作该步的终止性失败。

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::citation::{ChapterMarker, Position};
use crate::domain::retrieval::{BibleVersion, Verse};

/// 待写入的经文
#[derive(Debug, Clone)]
pub struct VerseRecord {
    pub position: Position,
    pub text: String,
}

/// Verse Store Port
#[async_trait]
pub trait VerseStorePort: Send + Sync {
    /// 取单节（不存在时返回空列表）
    async fn fetch_verse(
        &self,
        position: &Position,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError>;

    /// 取整章，按节号升序
    async fn fetch_chapter(
        &self,
        chapter: &ChapterMarker,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError>;

    /// 批量取节，按请求顺序返回，跳过不存在的节
    async fn fetch_verse_list(
        &self,
        positions: &[Position],
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError>;

    /// 写入（覆盖）译本经文，返回写入条数
    async fn save_verses(
        &self,
        version: &BibleVersion,
        verses: &[VerseRecord],
    ) -> Result<usize, RepositoryError>;
}
