//! Version HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ImportVersion, ListVersions};
use crate::infrastructure::http::dto::{
    ApiResponse, ImportVersionRequest, ImportVersionResult, VersionResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有译本
pub async fn list_versions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<VersionResponse>>>, ApiError> {
    let records = state.list_versions_handler.handle(ListVersions).await?;
    let versions = records.into_iter().map(VersionResponse::from).collect();
    Ok(Json(ApiResponse::success(versions)))
}

/// 导入译本及其经文
pub async fn import_version(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportVersionRequest>,
) -> Result<Json<ApiResponse<ImportVersionResult>>, ApiError> {
    let command = ImportVersion {
        abbreviation: req.abbreviation,
        name: req.name,
        language: req.language,
        verses: req.verses.into_iter().map(Into::into).collect(),
    };

    let result = state.import_version_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ImportVersionResult {
        abbreviation: result.version.abbreviation().to_string(),
        imported: result.imported,
    })))
}
