//! SQLite Version Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, VersionRecord, VersionRepositoryPort};
use crate::domain::retrieval::BibleVersion;

/// SQLite Version Repository
pub struct SqliteVersionRepository {
    pool: DbPool,
}

impl SqliteVersionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VersionRow {
    abbreviation: String,
    name: String,
    language: String,
}

impl TryFrom<VersionRow> for BibleVersion {
    type Error = RepositoryError;

    fn try_from(row: VersionRow) -> Result<Self, Self::Error> {
        BibleVersion::new(row.abbreviation, row.name, row.language)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }
}

#[derive(FromRow)]
struct VersionSummaryRow {
    abbreviation: String,
    name: String,
    language: String,
    created_at: String,
    verse_count: i64,
}

impl TryFrom<VersionSummaryRow> for VersionRecord {
    type Error = RepositoryError;

    fn try_from(row: VersionSummaryRow) -> Result<Self, Self::Error> {
        Ok(VersionRecord {
            version: BibleVersion::new(row.abbreviation, row.name, row.language)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            verse_count: row.verse_count as usize,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl VersionRepositoryPort for SqliteVersionRepository {
    async fn save(&self, version: &BibleVersion) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO versions (abbreviation, name, language, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(abbreviation) DO UPDATE SET
                name = excluded.name,
                language = excluded.language
            "#,
        )
        .bind(version.abbreviation())
        .bind(version.name())
        .bind(version.language())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<BibleVersion>, RepositoryError> {
        let row: Option<VersionRow> = sqlx::query_as(
            "SELECT abbreviation, name, language FROM versions WHERE abbreviation = ?",
        )
        .bind(abbreviation.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(BibleVersion::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<VersionRecord>, RepositoryError> {
        let rows: Vec<VersionSummaryRow> = sqlx::query_as(
            r#"
            SELECT v.abbreviation, v.name, v.language, v.created_at,
                   (SELECT COUNT(*) FROM verses WHERE verses.version = v.abbreviation) AS verse_count
            FROM versions v
            ORDER BY v.abbreviation
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(VersionRecord::try_from).collect()
    }

    async fn delete(&self, abbreviation: &str) -> Result<(), RepositoryError> {
        let abbreviation = abbreviation.trim().to_lowercase();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM verses WHERE version = ?")
            .bind(&abbreviation)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM versions WHERE abbreviation = ?")
            .bind(&abbreviation)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
