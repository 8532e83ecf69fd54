//! Passage Query Handlers
//!
//! 引文 → 坐标集合 → 检索计划 → 并发执行 → 按步骤顺序组装

use futures_util::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, VerseStorePort, VersionRepositoryPort};
use crate::application::queries::{PlanPassage, ReadPassage};
use crate::domain::canon::BookResolver;
use crate::domain::citation::{self, CoordinateSet};
use crate::domain::retrieval::{
    self, assemble, BibleVersion, PlanMode, RetrievalPlan, StepTarget, Verse,
};

// ============================================================================
// Response DTOs
// ============================================================================

/// 经文读取响应
#[derive(Debug, Clone)]
pub struct PassageResponse {
    /// 规范化后的引文
    pub reference: String,
    pub mode: PlanMode,
    pub verses: Vec<Verse>,
}

/// 检索计划响应
#[derive(Debug, Clone)]
pub struct PassagePlanResponse {
    pub reference: String,
    pub plan: RetrievalPlan,
}

// ============================================================================
// Shared
// ============================================================================

/// 解析引文与译本，得到规范坐标集合和检索计划
async fn prepare(
    resolver: &BookResolver,
    version_repo: &dyn VersionRepositoryPort,
    default_version: &str,
    citation: &str,
    requested: &[String],
) -> Result<(CoordinateSet, RetrievalPlan), ApplicationError> {
    let spec = citation::parse(resolver, citation)?;
    let coords = citation::expand(&spec);
    let versions = resolve_versions(version_repo, requested, default_version).await?;
    let plan = retrieval::plan(&coords, &versions)?;
    Ok((coords, plan))
}

/// 按请求顺序解析译本缩写；未请求任何译本时使用默认译本
async fn resolve_versions(
    version_repo: &dyn VersionRepositoryPort,
    requested: &[String],
    default_version: &str,
) -> Result<Vec<BibleVersion>, ApplicationError> {
    let mut abbreviations: Vec<&str> = requested
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if abbreviations.is_empty() {
        abbreviations.push(default_version);
    }

    let mut versions = Vec::with_capacity(abbreviations.len());
    for abbreviation in abbreviations {
        let version = version_repo
            .find_by_abbreviation(abbreviation)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Version", abbreviation))?;
        versions.push(version);
    }
    Ok(versions)
}

/// 并发执行计划中的所有步骤，结果以步骤序号为键
///
/// 任一步失败则整体失败。
pub async fn execute_plan(
    verse_store: &dyn VerseStorePort,
    plan: &RetrievalPlan,
) -> Result<HashMap<usize, Vec<Verse>>, RepositoryError> {
    let fetches = plan.steps().iter().map(|step| async move {
        let verses = match step.target() {
            StepTarget::Verse(position) => {
                verse_store.fetch_verse(position, step.version()).await?
            }
            StepTarget::VerseList(positions) => {
                verse_store
                    .fetch_verse_list(positions, step.version())
                    .await?
            }
            StepTarget::Chapter(chapter) => {
                verse_store.fetch_chapter(chapter, step.version()).await?
            }
        };
        tracing::debug!(
            step = step.index(),
            version = %step.version(),
            verses = verses.len(),
            "Plan step fetched"
        );
        Ok::<_, RepositoryError>((step.index(), verses))
    });

    Ok(try_join_all(fetches).await?.into_iter().collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// ReadPassage Handler
pub struct ReadPassageHandler {
    resolver: Arc<BookResolver>,
    version_repo: Arc<dyn VersionRepositoryPort>,
    verse_store: Arc<dyn VerseStorePort>,
    default_version: String,
}

impl ReadPassageHandler {
    pub fn new(
        resolver: Arc<BookResolver>,
        version_repo: Arc<dyn VersionRepositoryPort>,
        verse_store: Arc<dyn VerseStorePort>,
        default_version: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            version_repo,
            verse_store,
            default_version: default_version.into(),
        }
    }

    pub async fn handle(&self, query: ReadPassage) -> Result<PassageResponse, ApplicationError> {
        let (coords, plan) = prepare(
            &self.resolver,
            self.version_repo.as_ref(),
            &self.default_version,
            &query.citation,
            &query.versions,
        )
        .await?;

        let results = execute_plan(self.verse_store.as_ref(), &plan).await?;
        let verses = assemble(&plan, results);

        tracing::info!(
            reference = %coords.reference(),
            mode = plan.mode().as_str(),
            steps = plan.len(),
            verses = verses.len(),
            "Passage read"
        );

        Ok(PassageResponse {
            reference: coords.reference(),
            mode: plan.mode(),
            verses,
        })
    }
}

/// PlanPassage Handler
pub struct PlanPassageHandler {
    resolver: Arc<BookResolver>,
    version_repo: Arc<dyn VersionRepositoryPort>,
    default_version: String,
}

impl PlanPassageHandler {
    pub fn new(
        resolver: Arc<BookResolver>,
        version_repo: Arc<dyn VersionRepositoryPort>,
        default_version: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            version_repo,
            default_version: default_version.into(),
        }
    }

    pub async fn handle(&self, query: PlanPassage) -> Result<PassagePlanResponse, ApplicationError> {
        let (coords, plan) = prepare(
            &self.resolver,
            self.version_repo.as_ref(),
            &self.default_version,
            &query.citation,
            &query.versions,
        )
        .await?;

        Ok(PassagePlanResponse {
            reference: coords.reference(),
            plan,
        })
    }
}
