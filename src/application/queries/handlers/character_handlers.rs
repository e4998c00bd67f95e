//! Character Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CharacterTrackerPort, NovelRepositoryPort, RelationshipAnalysis};
use crate::application::queries::{
    AnalyzeRelationships, GetCharacter, ListCharacters, ListRelationshipTypes,
};
use crate::domain::character::{Character, RelationshipKind};

// ============================================================================
// Response DTOs
// ============================================================================

/// 关系类型及其取值范围
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipTypeInfo {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl From<RelationshipKind> for RelationshipTypeInfo {
    fn from(kind: RelationshipKind) -> Self {
        let (min, max) = kind.range();
        Self {
            name: kind.as_str(),
            min,
            max,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetCharacter Handler
pub struct GetCharacterHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl GetCharacterHandler {
    pub fn new(tracker: Arc<dyn CharacterTrackerPort>) -> Self {
        Self { tracker }
    }

    pub async fn handle(&self, query: GetCharacter) -> Result<Character, ApplicationError> {
        Ok(self.tracker.get(&query.character_id)?)
    }
}

/// ListCharacters Handler
pub struct ListCharactersHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl ListCharactersHandler {
    pub fn new(
        tracker: Arc<dyn CharacterTrackerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { tracker, novels }
    }

    pub async fn handle(&self, query: ListCharacters) -> Result<Vec<Character>, ApplicationError> {
        if let Some(novel_id) = &query.novel_id {
            self.novels.ensure_exists(novel_id)?;
        }
        Ok(self.tracker.list(query.novel_id.as_ref()))
    }
}

/// AnalyzeRelationships Handler
pub struct AnalyzeRelationshipsHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl AnalyzeRelationshipsHandler {
    pub fn new(tracker: Arc<dyn CharacterTrackerPort>) -> Self {
        Self { tracker }
    }

    pub async fn handle(
        &self,
        query: AnalyzeRelationships,
    ) -> Result<RelationshipAnalysis, ApplicationError> {
        let analysis = self
            .tracker
            .analyze(&query.character_id, query.target_id.as_ref())?;

        tracing::debug!(
            character_id = %query.character_id,
            entries = analysis.len(),
            "Relationships analyzed"
        );

        Ok(analysis)
    }
}

/// ListRelationshipTypes Handler
pub struct ListRelationshipTypesHandler;

impl ListRelationshipTypesHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        _query: ListRelationshipTypes,
    ) -> Result<Vec<RelationshipTypeInfo>, ApplicationError> {
        Ok(RelationshipKind::ALL
            .into_iter()
            .map(RelationshipTypeInfo::from)
            .collect())
    }
}

impl Default for ListRelationshipTypesHandler {
    fn default() -> Self {
        Self::new()
    }
}
