//! In-Memory Verse Store Implementation
//!
//! 同时实现译本目录与经文存储，供测试和演示使用

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::ports::{
    RepositoryError, VerseRecord, VerseStorePort, VersionRecord, VersionRepositoryPort,
};
use crate::domain::citation::{ChapterMarker, Position};
use crate::domain::retrieval::{BibleVersion, Verse};

struct VersionEntry {
    version: BibleVersion,
    verses: BTreeMap<Position, String>,
    created_at: DateTime<Utc>,
}

/// 内存经文存储
pub struct InMemoryVerseStore {
    versions: DashMap<String, VersionEntry>,
}

impl InMemoryVerseStore {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn lookup(&self, version: &BibleVersion, position: &Position) -> Option<Verse> {
        let entry = self.versions.get(version.abbreviation())?;
        entry
            .verses
            .get(position)
            .map(|text| Verse::new(text.clone(), *position, entry.version.clone()))
    }
}

impl Default for InMemoryVerseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionRepositoryPort for InMemoryVerseStore {
    async fn save(&self, version: &BibleVersion) -> Result<(), RepositoryError> {
        self.versions
            .entry(version.abbreviation().to_string())
            .and_modify(|entry| entry.version = version.clone())
            .or_insert_with(|| VersionEntry {
                version: version.clone(),
                verses: BTreeMap::new(),
                created_at: Utc::now(),
            });
        Ok(())
    }

    async fn find_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<BibleVersion>, RepositoryError> {
        Ok(self
            .versions
            .get(&abbreviation.trim().to_lowercase())
            .map(|entry| entry.version.clone()))
    }

    async fn find_all(&self) -> Result<Vec<VersionRecord>, RepositoryError> {
        let mut records: Vec<VersionRecord> = self
            .versions
            .iter()
            .map(|entry| VersionRecord {
                version: entry.version.clone(),
                verse_count: entry.verses.len(),
                created_at: entry.created_at,
            })
            .collect();
        records.sort_by(|a, b| a.version.abbreviation().cmp(b.version.abbreviation()));
        Ok(records)
    }

    async fn delete(&self, abbreviation: &str) -> Result<(), RepositoryError> {
        self.versions.remove(&abbreviation.trim().to_lowercase());
        Ok(())
    }
}

#[async_trait]
impl VerseStorePort for InMemoryVerseStore {
    async fn fetch_verse(
        &self,
        position: &Position,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        Ok(self.lookup(version, position).into_iter().collect())
    }

    async fn fetch_chapter(
        &self,
        chapter: &ChapterMarker,
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        let Some(entry) = self.versions.get(version.abbreviation()) else {
            return Ok(Vec::new());
        };
        let first = Position::from_parts(chapter.book(), chapter.chapter(), 1);
        let last = Position::from_parts(chapter.book(), chapter.chapter(), u32::MAX);
        Ok(entry
            .verses
            .range(first..=last)
            .map(|(position, text)| Verse::new(text.clone(), *position, entry.version.clone()))
            .collect())
    }

    async fn fetch_verse_list(
        &self,
        positions: &[Position],
        version: &BibleVersion,
    ) -> Result<Vec<Verse>, RepositoryError> {
        Ok(positions
            .iter()
            .filter_map(|position| self.lookup(version, position))
            .collect())
    }

    async fn save_verses(
        &self,
        version: &BibleVersion,
        verses: &[VerseRecord],
    ) -> Result<usize, RepositoryError> {
        let mut entry = self
            .versions
            .get_mut(version.abbreviation())
            .ok_or_else(|| RepositoryError::NotFound(version.abbreviation().to_string()))?;
        for record in verses {
            entry.verses.insert(record.position, record.text.clone());
        }
        tracing::debug!(version = %version, count = verses.len(), "Verses stored in memory");
        Ok(verses.len())
    }
}
