//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ImportVersionHandler,
    // Query handlers
    ListVersionsHandler, PlanPassageHandler, ReadPassageHandler,
    // Ports
    VerseStorePort, VersionRepositoryPort,
};
use crate::domain::canon::BookResolver;

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub import_version_handler: ImportVersionHandler,

    // ========== Query Handlers ==========
    pub list_versions_handler: ListVersionsHandler,
    pub read_passage_handler: ReadPassageHandler,
    pub plan_passage_handler: PlanPassageHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `default_version` 在请求未指定译本时使用
    pub fn new(
        resolver: Arc<BookResolver>,
        version_repo: Arc<dyn VersionRepositoryPort>,
        verse_store: Arc<dyn VerseStorePort>,
        default_version: impl Into<String>,
    ) -> Self {
        let default_version = default_version.into();
        Self {
            // Command handlers
            import_version_handler: ImportVersionHandler::new(
                resolver.clone(),
                version_repo.clone(),
                verse_store.clone(),
            ),

            // Query handlers
            list_versions_handler: ListVersionsHandler::new(version_repo.clone()),
            read_passage_handler: ReadPassageHandler::new(
                resolver.clone(),
                version_repo.clone(),
                verse_store,
                default_version.clone(),
            ),
            plan_passage_handler: PlanPassageHandler::new(resolver, version_repo, default_version),
        }
    }
}
