//! Novel HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CreateNovel, DeleteNovel, GetNovel, ListNovels, UpdateNovel};
use crate::domain::novel::{Novel, NovelId};
use crate::infrastructure::http::dto::{ApiResponse, Empty, IdRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNovelRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNovelRequest {
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct NovelResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: &'static str,
    pub is_public: bool,
    pub language: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Novel> for NovelResponse {
    fn from(n: Novel) -> Self {
        Self {
            id: *n.id().as_uuid(),
            title: n.title().to_string(),
            description: n.description().map(str::to_string),
            genre: n.genre().map(str::to_string),
            status: n.status().as_str(),
            is_public: n.is_public(),
            language: n.language().to_string(),
            tags: n.tags().to_vec(),
            created_at: n.created_at().to_rfc3339(),
            updated_at: n.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建小说
pub async fn create_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNovelRequest>,
) -> Result<Json<ApiResponse<NovelResponse>>, ApiError> {
    let command = CreateNovel {
        title: req.title,
        description: req.description,
        genre: req.genre,
        status: req.status,
        is_public: req.is_public,
        language: req.language,
        tags: req.tags,
    };

    let novel = state.create_novel_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(novel.into())))
}

/// 获取小说
pub async fn get_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<NovelResponse>>, ApiError> {
    let query = GetNovel {
        novel_id: NovelId::from_uuid(req.id),
    };

    let novel = state.get_novel_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(novel.into())))
}

/// 获取小说列表
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<NovelResponse>>>, ApiError> {
    let novels = state.list_novels_handler.handle(ListNovels).await?;

    Ok(Json(ApiResponse::success(
        novels.into_iter().map(NovelResponse::from).collect(),
    )))
}

/// 更新小说
pub async fn update_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateNovelRequest>,
) -> Result<Json<ApiResponse<NovelResponse>>, ApiError> {
    let command = UpdateNovel {
        novel_id: NovelId::from_uuid(req.id),
        title: req.title,
        description: req.description,
        genre: req.genre,
        status: req.status,
        is_public: req.is_public,
        language: req.language,
        tags: req.tags,
    };

    let novel = state.update_novel_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(novel.into())))
}

/// 删除小说，其叙事检查器一并丢弃
pub async fn delete_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteNovel {
        novel_id: NovelId::from_uuid(req.id),
    };

    state.delete_novel_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}
