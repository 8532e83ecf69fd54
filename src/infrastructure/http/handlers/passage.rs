//! Passage HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{PlanPassage, ReadPassage};
use crate::infrastructure::http::dto::{
    ApiResponse, PassagePlanResult, PassageReadResponse, PassageRequest, PlanStepResponse,
    VerseResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 读取经文
pub async fn read_passage(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PassageRequest>,
) -> Result<Json<ApiResponse<PassageReadResponse>>, ApiError> {
    let query = ReadPassage {
        citation: req.citation,
        versions: req.versions,
    };

    let result = state.read_passage_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(PassageReadResponse {
        reference: result.reference,
        mode: result.mode.as_str(),
        verses: result.verses.into_iter().map(VerseResponse::from).collect(),
    })))
}

/// 只生成检索计划，不读取经文
pub async fn plan_passage(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PassageRequest>,
) -> Result<Json<ApiResponse<PassagePlanResult>>, ApiError> {
    let query = PlanPassage {
        citation: req.citation,
        versions: req.versions,
    };

    let result = state.plan_passage_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(PassagePlanResult {
        reference: result.reference,
        mode: result.plan.mode().as_str(),
        steps: result.plan.steps().iter().map(PlanStepResponse::from).collect(),
    })))
}
