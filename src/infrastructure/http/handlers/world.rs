//! World HTTP Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateWorld, CreateWorldElement, DeleteWorld, DeleteWorldElement, GetLastValidation, GetWorld,
    GetWorldElement, ListWorldElements, ListWorlds, UpdateWorld, UpdateWorldElement, ValidateWorld,
};
use crate::domain::world::{
    ElementDraft, ElementPatch, ElementRelationship, ValidationReport, World, WorldDraft,
    WorldElement, WorldElementId, WorldId, WorldPatch,
};
use crate::infrastructure::http::dto::{ApiResponse, Empty, IdRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpdateWorldRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: WorldPatch,
}

#[derive(Debug, Deserialize)]
pub struct ListWorldElementsRequest {
    #[serde(default)]
    pub world_id: Option<Uuid>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorldElementRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub patch: ElementPatch,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateWorldRequest {
    /// 缺省时校验全部要素
    #[serde(default)]
    pub id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct WorldResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub time_period: Option<String>,
    pub geography: Option<String>,
    pub culture: Option<String>,
    pub magic_system: Option<String>,
    pub technology_level: Option<String>,
    pub social_structure: Option<String>,
    pub rules_and_laws: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<World> for WorldResponse {
    fn from(w: World) -> Self {
        let text = |value: Option<&str>| value.map(str::to_string);
        Self {
            id: *w.id().as_uuid(),
            title: w.title().to_string(),
            description: w.description().to_string(),
            time_period: text(w.time_period()),
            geography: text(w.geography()),
            culture: text(w.culture()),
            magic_system: text(w.magic_system()),
            technology_level: text(w.technology_level()),
            social_structure: text(w.social_structure()),
            rules_and_laws: text(w.rules_and_laws()),
            created_at: w.created_at().to_rfc3339(),
            updated_at: w.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorldElementResponse {
    pub id: Uuid,
    pub world_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub attributes: Map<String, Value>,
    pub relationships: Vec<ElementRelationship>,
    pub rules: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WorldElement> for WorldElementResponse {
    fn from(e: WorldElement) -> Self {
        Self {
            id: *e.id().as_uuid(),
            world_id: e.world_id().map(|w| *w.as_uuid()),
            name: e.name().to_string(),
            description: e.description().to_string(),
            category: e.category().to_string(),
            attributes: e.attributes().clone(),
            relationships: e.relationships().to_vec(),
            rules: e.rules().to_vec(),
            created_at: e.created_at().to_rfc3339(),
            updated_at: e.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建世界观
pub async fn create_world(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<WorldDraft>,
) -> Result<Json<ApiResponse<WorldResponse>>, ApiError> {
    let world = state
        .create_world_handler
        .handle(CreateWorld { draft })
        .await?;

    Ok(Json(ApiResponse::success(world.into())))
}

/// 获取世界观
pub async fn get_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<WorldResponse>>, ApiError> {
    let query = GetWorld {
        world_id: WorldId::from_uuid(req.id),
    };

    let world = state.get_world_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(world.into())))
}

/// 获取世界观列表
pub async fn list_worlds(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<WorldResponse>>>, ApiError> {
    let worlds = state.list_worlds_handler.handle(ListWorlds).await?;

    Ok(Json(ApiResponse::success(
        worlds.into_iter().map(WorldResponse::from).collect(),
    )))
}

/// 更新世界观
pub async fn update_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateWorldRequest>,
) -> Result<Json<ApiResponse<WorldResponse>>, ApiError> {
    let command = UpdateWorld {
        world_id: WorldId::from_uuid(req.id),
        patch: req.patch,
    };

    let world = state.update_world_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(world.into())))
}

/// 删除世界观及其要素
pub async fn delete_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteWorld {
        world_id: WorldId::from_uuid(req.id),
    };

    state.delete_world_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 创建世界观要素
pub async fn create_world_element(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ElementDraft>,
) -> Result<Json<ApiResponse<WorldElementResponse>>, ApiError> {
    let element = state
        .create_world_element_handler
        .handle(CreateWorldElement { draft })
        .await?;

    Ok(Json(ApiResponse::success(element.into())))
}

/// 获取世界观要素
pub async fn get_world_element(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<WorldElementResponse>>, ApiError> {
    let query = GetWorldElement {
        element_id: WorldElementId::from_uuid(req.id),
    };

    let element = state.get_world_element_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(element.into())))
}

/// 获取世界观要素列表，可按世界观与分类过滤
pub async fn list_world_elements(
    State(state): State<Arc<AppState>>,
    Query(req): Query<ListWorldElementsRequest>,
) -> Result<Json<ApiResponse<Vec<WorldElementResponse>>>, ApiError> {
    let query = ListWorldElements {
        world_id: req.world_id.map(WorldId::from_uuid),
        category: req.category,
    };

    let elements = state.list_world_elements_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(
        elements.into_iter().map(WorldElementResponse::from).collect(),
    )))
}

/// 更新世界观要素
pub async fn update_world_element(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateWorldElementRequest>,
) -> Result<Json<ApiResponse<WorldElementResponse>>, ApiError> {
    let command = UpdateWorldElement {
        element_id: WorldElementId::from_uuid(req.id),
        patch: req.patch,
    };

    let element = state.update_world_element_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(element.into())))
}

/// 删除世界观要素
pub async fn delete_world_element(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteWorldElement {
        element_id: WorldElementId::from_uuid(req.id),
    };

    state.delete_world_element_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 世界观一致性校验
pub async fn validate_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateWorldRequest>,
) -> Result<Json<ApiResponse<ValidationReport>>, ApiError> {
    let command = ValidateWorld {
        element_id: req.id.map(WorldElementId::from_uuid),
    };

    let report = state.validate_world_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(report)))
}

/// 最近一次校验报告，尚未校验时 data 为 null
pub async fn get_last_validation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Option<ValidationReport>>>, ApiError> {
    let report = state
        .get_last_validation_handler
        .handle(GetLastValidation)
        .await?;

    Ok(Json(ApiResponse::success(report)))
}
