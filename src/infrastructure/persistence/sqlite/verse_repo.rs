//! SQLite Verse Store

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, VerseRecord, VerseStorePort};
use crate::domain::canon::Book;
use crate::domain::citation::{ChapterMarker, Position};
use crate::domain::retrieval::{BibleVersion, Verse};

/// SQLite Verse Store
pub struct SqliteVerseStore {
    pool: DbPool,
}

impl SqliteVerseStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_one(
        &self,
        position: &Position,
        version: &BibleVersion,
    ) -> Result<Option<Verse>, RepositoryError> {
        let row: Option<VerseRow> = sqlx::query_as(
            r#"
            SELECT book, chapter, verse, text FROM verses
            WHERE version = ? AND book = ? AND chapter = ? AND verse = ?
            "#,
        )
        .bind(version.abbreviation())
        .bind(position.book().key())
        .bind(position.chapter() as i64)
        .bind(position.verse() as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(|row| row.into_verse(version)).transpose()
    }
}

#[derive(FromRow)]
struct VerseRow {
    book: String,
    chapter: i64,
    verse: i64,
    text: String,
}

impl VerseRow {
    fn into_verse(self, version: &BibleVersion) -> Result<Verse, RepositoryError> {
        let book = Book::from_key(&self.book).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown book key: {}", self.book))
        })?;
        let position = Position::new(book, self.chapter as u32, self.verse as u32)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        Ok(Verse::new(self.text, position, version.clone()))
    }
}

#[async_trait]
impl VerseStorePort for SqliteVerseStore {
    async fn fetch_verse(
        &self,
        position: &Position,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        Ok(self.find_one(position, version).await?.into_iter().collect())
    }

    async fn fetch_chapter(
        &self,
        chapter: &ChapterMarker,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        let rows: Vec<VerseRow> = sqlx::query_as(
            r#"
            SELECT book, chapter, verse, text FROM verses
            WHERE version = ? AND book = ? AND chapter = ?
            ORDER BY verse
            "#,
        )
        .bind(version.abbreviation())
        .bind(chapter.book().key())
        .bind(chapter.chapter() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(|row| row.into_verse(version)).collect()
    }

    async fn fetch_verse_list(
        &self,
        positions: &[Position],
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        let mut verses = Vec::with_capacity(positions.len());
        for position in positions {
            if let Some(verse) = self.find_one(position, version).await? {
                verses.push(verse);
            }
        }
        Ok(verses)
    }

    async fn save_verses(
        &self,
        version: &BibleVersion,
        verses: &[VerseRecord],
    ) -> Result<usize, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        for record in verses {
            sqlx::query(
                r#"
                INSERT INTO verses (version, book, chapter, verse, text)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(version, book, chapter, verse) DO UPDATE SET
                    text = excluded.text
                "#,
            )
            .bind(version.abbreviation())
            .bind(record.position.book().key())
            .bind(record.position.chapter() as i64)
            .bind(record.position.verse() as i64)
            .bind(&record.text)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(verses.len())
    }
}
