//! Version Command Handlers

use std::sync::Arc;

use crate::application::commands::ImportVersion;
use crate::application::error::ApplicationError;
use crate::application::ports::{VerseRecord, VerseStorePort, VersionRepositoryPort};
use crate::domain::canon::BookResolver;
use crate::domain::citation::{normalize_citation, Position};
use crate::domain::retrieval::BibleVersion;

// ============================================================================
// ImportVersion
// ============================================================================

/// 导入译本响应
#[derive(Debug, Clone)]
pub struct ImportVersionResponse {
    pub version: BibleVersion,
    pub imported: usize,
}

/// ImportVersion Handler
pub struct ImportVersionHandler {
    resolver: Arc<BookResolver>,
    version_repo: Arc<dyn VersionRepositoryPort>,
    verse_store: Arc<dyn VerseStorePort>,
}

impl ImportVersionHandler {
    pub fn new(
        resolver: Arc<BookResolver>,
        version_repo: Arc<dyn VersionRepositoryPort>,
        verse_store: Arc<dyn VerseStorePort>,
    ) -> Self {
        Self {
            resolver,
            version_repo,
            verse_store,
        }
    }

    pub async fn handle(
        &self,
        command: ImportVersion,
    ) -> Result<ImportVersionResponse, ApplicationError> {
        let version = BibleVersion::new(command.abbreviation, command.name, command.language)
            .map_err(ApplicationError::validation)?;

        // 先整体校验，任何一节无效都不写入
        let mut records = Vec::with_capacity(command.verses.len());
        for verse in command.verses {
            let book = self
                .resolver
                .resolve(&normalize_citation(&verse.book))
                .map_err(|e| ApplicationError::validation(e.to_string()))?;
            let position = Position::new(book, verse.chapter, verse.verse).map_err(|e| {
                ApplicationError::validation(format!(
                    "{} {},{}: {}",
                    verse.book, verse.chapter, verse.verse, e
                ))
            })?;
            if verse.text.trim().is_empty() {
                return Err(ApplicationError::validation(format!(
                    "empty text at {}",
                    position
                )));
            }
            records.push(VerseRecord {
                position,
                text: verse.text,
            });
        }

        // 经文写入依赖译本已登记；写入失败时撤销本次新登记的译本
        let existed = self
            .version_repo
            .find_by_abbreviation(version.abbreviation())
            .await?
            .is_some();
        self.version_repo.save(&version).await?;

        let imported = match self.verse_store.save_verses(&version, &records).await {
            Ok(imported) => imported,
            Err(e) => {
                if !existed {
                    if let Err(rollback) = self.version_repo.delete(version.abbreviation()).await {
                        tracing::error!(
                            version = %version,
                            error = %rollback,
                            "Failed to remove version after verse import failure"
                        );
                    }
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            version = %version,
            name = %version.name(),
            imported = imported,
            "Version imported"
        );

        Ok(ImportVersionResponse { version, imported })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::ImportedVerse;
    use crate::application::ports::RepositoryError;
    use crate::domain::canon::Book;
    use crate::domain::citation::ChapterMarker;
    use crate::domain::retrieval::Verse;
    use crate::infrastructure::memory::InMemoryVerseStore;

    fn handler(store: Arc<InMemoryVerseStore>) -> ImportVersionHandler {
        ImportVersionHandler::new(
            Arc::new(BookResolver::bundled().unwrap()),
            store.clone(),
            store,
        )
    }

    fn verse(book: &str, chapter: u32, verse: u32, text: &str) -> ImportedVerse {
        ImportedVerse {
            book: book.to_string(),
            chapter,
            verse,
            text: text.to_string(),
        }
    }

    fn command(verses: Vec<ImportedVerse>) -> ImportVersion {
        ImportVersion {
            abbreviation: "KJV".to_string(),
            name: "King James Version".to_string(),
            language: "en".to_string(),
            verses,
        }
    }

    #[tokio::test]
    async fn test_import_resolves_books_by_abbreviation() {
        let store = InMemoryVerseStore::new().arc();
        let response = handler(store.clone())
            .handle(command(vec![
                verse("Jn", 1, 1, "In the beginning was the Word"),
                verse("genesis", 1, 1, "In the beginning God created"),
                verse("1 John", 1, 1, "That which was from the beginning"),
            ]))
            .await
            .unwrap();
        assert_eq!(response.imported, 3);
        assert_eq!(response.version.abbreviation(), "kjv");

        let position = Position::new(Book::John, 1, 1).unwrap();
        let verses = store.fetch_verse(&position, &response.version).await.unwrap();
        assert_eq!(verses[0].text(), "In the beginning was the Word");
    }

    #[tokio::test]
    async fn test_import_rejects_bad_verse_without_writing() {
        let store = InMemoryVerseStore::new().arc();
        let result = handler(store.clone())
            .handle(command(vec![
                verse("Jn", 1, 1, "ok"),
                verse("Jn", 0, 1, "bad chapter"),
            ]))
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    /// 经文写入总是失败的存储
    struct FailingVerseStore;

    #[async_trait::async_trait]
    impl VerseStorePort for FailingVerseStore {
        async fn fetch_verse(
            &self,
            _position: &Position,
            _version: &BibleVersion,
        ) -> Result<Vec<Verse>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn fetch_chapter(
            &self,
            _chapter: &ChapterMarker,
            _version: &BibleVersion,
        ) -> Result<Vec<Verse>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn fetch_verse_list(
            &self,
            _positions: &[Position],
            _version: &BibleVersion,
        ) -> Result<Vec<Verse>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn save_verses(
            &self,
            _version: &BibleVersion,
            _verses: &[VerseRecord],
        ) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_verse_write_leaves_no_new_version() {
        let catalog = InMemoryVerseStore::new().arc();
        let handler = ImportVersionHandler::new(
            Arc::new(BookResolver::bundled().unwrap()),
            catalog.clone(),
            Arc::new(FailingVerseStore),
        );

        let result = handler.handle(command(vec![verse("Jn", 1, 1, "text")])).await;
        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));
        assert!(catalog.find_by_abbreviation("kjv").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_verse_write_keeps_existing_version() {
        let catalog = InMemoryVerseStore::new().arc();
        let existing = BibleVersion::new("kjv", "KJV", "en").unwrap();
        catalog.save(&existing).await.unwrap();
        let handler = ImportVersionHandler::new(
            Arc::new(BookResolver::bundled().unwrap()),
            catalog.clone(),
            Arc::new(FailingVerseStore),
        );

        let result = handler.handle(command(vec![verse("Jn", 1, 1, "text")])).await;
        assert!(result.is_err());
        assert!(catalog.find_by_abbreviation("kjv").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_import_rejects_unknown_book() {
        let store = InMemoryVerseStore::new().arc();
        let result = handler(store)
            .handle(command(vec![verse("Enoch", 1, 1, "text")]))
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
