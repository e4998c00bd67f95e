//! Character HTTP Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    AnalyzeRelationships, CreateCharacter, DeleteCharacter, GetCharacter, ListCharacters,
    ListRelationshipTypes, RelationshipTypeInfo, UpdateCharacter, UpdateRelationship,
};
use crate::domain::character::{Character, CharacterId, RelationshipScores};
use crate::domain::novel::NovelId;
use crate::infrastructure::http::dto::{ApiResponse, Empty, IdRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequest {
    /// 所属小说
    #[serde(default)]
    pub novel_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub personality: BTreeMap<String, f64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub appearance: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCharacterRequest {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub personality: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub appearance: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ListCharactersRequest {
    #[serde(default)]
    pub novel_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRelationshipsRequest {
    pub id: Uuid,
    #[serde(default)]
    pub target_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRelationshipRequest {
    pub id: Uuid,
    pub target_id: Uuid,
    pub relationship_type: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: Uuid,
    pub novel_id: Option<Uuid>,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub personality: BTreeMap<String, f64>,
    pub background: Option<String>,
    pub appearance: BTreeMap<String, String>,
    pub skills: Vec<String>,
    pub relationships: BTreeMap<Uuid, RelationshipScores>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Character> for CharacterResponse {
    fn from(c: Character) -> Self {
        Self {
            id: *c.id().as_uuid(),
            novel_id: c.novel_id().map(|n| *n.as_uuid()),
            name: c.name().to_string(),
            age: c.age(),
            gender: c.gender().map(str::to_string),
            personality: c.personality().clone(),
            background: c.background().map(str::to_string),
            appearance: c.appearance().clone(),
            skills: c.skills().to_vec(),
            relationships: c
                .relationships()
                .iter()
                .map(|(target, scores)| (*target.as_uuid(), scores.clone()))
                .collect(),
            created_at: c.created_at().to_rfc3339(),
            updated_at: c.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeRelationshipsResponse {
    pub character_id: Uuid,
    pub relationships: BTreeMap<Uuid, RelationshipScores>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建角色
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCharacterRequest>,
) -> Result<Json<ApiResponse<CharacterResponse>>, ApiError> {
    let command = CreateCharacter {
        novel_id: req.novel_id.map(NovelId::from_uuid),
        name: req.name,
        age: req.age,
        gender: req.gender,
        personality: req.personality,
        background: req.background,
        appearance: req.appearance,
        skills: req.skills,
    };

    let character = state.create_character_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(character.into())))
}

/// 获取角色详情
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<CharacterResponse>>, ApiError> {
    let query = GetCharacter {
        character_id: CharacterId::from_uuid(req.id),
    };

    let character = state.get_character_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(character.into())))
}

/// 获取角色列表，可按小说过滤
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    Query(req): Query<ListCharactersRequest>,
) -> Result<Json<ApiResponse<Vec<CharacterResponse>>>, ApiError> {
    let query = ListCharacters {
        novel_id: req.novel_id.map(NovelId::from_uuid),
    };

    let characters = state.list_characters_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(
        characters.into_iter().map(CharacterResponse::from).collect(),
    )))
}

/// 更新角色档案
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateCharacterRequest>,
) -> Result<Json<ApiResponse<CharacterResponse>>, ApiError> {
    let command = UpdateCharacter {
        character_id: CharacterId::from_uuid(req.id),
        name: req.name,
        age: req.age,
        gender: req.gender,
        personality: req.personality,
        background: req.background,
        appearance: req.appearance,
        skills: req.skills,
    };

    let character = state.update_character_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(character.into())))
}

/// 删除角色
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteCharacter {
        character_id: CharacterId::from_uuid(req.id),
    };

    state.delete_character_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 关系分析
pub async fn analyze_relationships(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRelationshipsRequest>,
) -> Result<Json<ApiResponse<AnalyzeRelationshipsResponse>>, ApiError> {
    let query = AnalyzeRelationships {
        character_id: CharacterId::from_uuid(req.id),
        target_id: req.target_id.map(CharacterId::from_uuid),
    };

    let analysis = state.analyze_relationships_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(AnalyzeRelationshipsResponse {
        character_id: req.id,
        relationships: analysis
            .into_iter()
            .map(|(id, scores)| (*id.as_uuid(), scores))
            .collect(),
    })))
}

/// 更新关系评分
pub async fn update_relationship(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRelationshipRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = UpdateRelationship {
        character_id: CharacterId::from_uuid(req.id),
        target_id: CharacterId::from_uuid(req.target_id),
        relationship_type: req.relationship_type,
        value: req.value,
    };

    state.update_relationship_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 关系类型注册表
pub async fn list_relationship_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<RelationshipTypeInfo>>>, ApiError> {
    let types = state
        .list_relationship_types_handler
        .handle(ListRelationshipTypes)
        .await?;

    Ok(Json(ApiResponse::success(types)))
}
