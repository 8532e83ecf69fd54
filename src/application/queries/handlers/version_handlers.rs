//! Version Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{VersionRecord, VersionRepositoryPort};
use crate::application::queries::ListVersions;

/// ListVersions Handler
pub struct ListVersionsHandler {
    version_repo: Arc<dyn VersionRepositoryPort>,
}

impl ListVersionsHandler {
    pub fn new(version_repo: Arc<dyn VersionRepositoryPort>) -> Self {
        Self { version_repo }
    }

    pub async fn handle(&self, _query: ListVersions) -> Result<Vec<VersionRecord>, ApplicationError> {
        Ok(self.version_repo.find_all().await?)
    }
}
