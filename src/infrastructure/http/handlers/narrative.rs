//! Narrative HTTP Handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    AnalyzeConsistency, CreateStructure, DiscardStructure, GetPlotIssues, GetStructure, PlotStatus,
    PlotValidation, ValidatePlot,
};
use crate::domain::narrative::{ConsistencyReport, StoryDraft, StoryStructure};
use crate::domain::novel::NovelId;
use crate::infrastructure::http::dto::{ApiResponse, Empty, NovelRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateStructureRequest {
    pub novel_id: Uuid,
    #[serde(flatten)]
    pub draft: StoryDraft,
}

/// 创建（或替换）故事结构
pub async fn create_structure(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStructureRequest>,
) -> Result<Json<ApiResponse<StoryStructure>>, ApiError> {
    let command = CreateStructure {
        novel_id: NovelId::from_uuid(req.novel_id),
        draft: req.draft,
    };

    let structure = state.create_structure_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(structure)))
}

/// 获取故事结构
pub async fn get_structure(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelRequest>,
) -> Result<Json<ApiResponse<StoryStructure>>, ApiError> {
    let query = GetStructure {
        novel_id: NovelId::from_uuid(req.novel_id),
    };

    let structure = state.get_structure_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(structure)))
}

/// 丢弃故事结构
pub async fn discard_structure(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DiscardStructure {
        novel_id: NovelId::from_uuid(req.novel_id),
    };

    state.discard_structure_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 情节校验
pub async fn validate_plot(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelRequest>,
) -> Result<Json<ApiResponse<PlotValidation>>, ApiError> {
    let command = ValidatePlot {
        novel_id: NovelId::from_uuid(req.novel_id),
    };

    let validation = state.validate_plot_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(validation)))
}

/// 检查器状态与最近一次情节校验的问题
pub async fn get_plot_issues(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelRequest>,
) -> Result<Json<ApiResponse<PlotStatus>>, ApiError> {
    let query = GetPlotIssues {
        novel_id: NovelId::from_uuid(req.novel_id),
    };

    let status = state.get_plot_issues_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(status)))
}

/// 一致性分析
pub async fn analyze_consistency(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelRequest>,
) -> Result<Json<ApiResponse<ConsistencyReport>>, ApiError> {
    let query = AnalyzeConsistency {
        novel_id: NovelId::from_uuid(req.novel_id),
    };

    let report = state.analyze_consistency_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(report)))
}
