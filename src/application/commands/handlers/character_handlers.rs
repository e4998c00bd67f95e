//! Character Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CreateCharacter, DeleteCharacter, UpdateCharacter, UpdateRelationship,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{CharacterTrackerPort, NovelRepositoryPort};
use crate::domain::character::{
    Character, CharacterAge, CharacterName, CharacterProfile, ProfilePatch, RelationshipKind,
};

// ============================================================================
// CreateCharacter
// ============================================================================

/// CreateCharacter Handler
pub struct CreateCharacterHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl CreateCharacterHandler {
    pub fn new(
        tracker: Arc<dyn CharacterTrackerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { tracker, novels }
    }

    pub async fn handle(&self, command: CreateCharacter) -> Result<Character, ApplicationError> {
        let name = CharacterName::new(command.name)?;
        let age = command.age.map(CharacterAge::new).transpose()?;
        if let Some(novel_id) = &command.novel_id {
            self.novels.ensure_exists(novel_id)?;
        }

        let profile = CharacterProfile {
            novel_id: command.novel_id,
            age,
            gender: command.gender,
            personality: command.personality,
            background: command.background,
            appearance: command.appearance,
            skills: command.skills,
        };

        let character = self.tracker.create(name, profile);

        // 小说在创建期间被删除时撤销
        if let Some(novel_id) = character.novel_id() {
            if let Err(e) = self.novels.ensure_exists(novel_id) {
                self.tracker.delete(character.id())?;
                return Err(e.into());
            }
        }

        tracing::info!(
            character_id = %character.id(),
            name = %character.name(),
            "Character created"
        );

        Ok(character)
    }
}

// ============================================================================
// UpdateCharacter
// ============================================================================

/// UpdateCharacter Handler
pub struct UpdateCharacterHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl UpdateCharacterHandler {
    pub fn new(tracker: Arc<dyn CharacterTrackerPort>) -> Self {
        Self { tracker }
    }

    pub async fn handle(&self, command: UpdateCharacter) -> Result<Character, ApplicationError> {
        let patch = ProfilePatch {
            name: command.name,
            age: command.age.map(CharacterAge::new).transpose()?,
            gender: command.gender,
            personality: command.personality,
            background: command.background,
            appearance: command.appearance,
            skills: command.skills,
        };

        let character = self.tracker.update_profile(&command.character_id, patch)?;

        tracing::info!(character_id = %character.id(), "Character updated");

        Ok(character)
    }
}

// ============================================================================
// DeleteCharacter
// ============================================================================

/// DeleteCharacter Handler
pub struct DeleteCharacterHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl DeleteCharacterHandler {
    pub fn new(tracker: Arc<dyn CharacterTrackerPort>) -> Self {
        Self { tracker }
    }

    pub async fn handle(&self, command: DeleteCharacter) -> Result<(), ApplicationError> {
        self.tracker.delete(&command.character_id)?;

        tracing::info!(character_id = %command.character_id, "Character deleted");

        Ok(())
    }
}

// ============================================================================
// UpdateRelationship
// ============================================================================

/// UpdateRelationship Handler
pub struct UpdateRelationshipHandler {
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl UpdateRelationshipHandler {
    pub fn new(tracker: Arc<dyn CharacterTrackerPort>) -> Self {
        Self { tracker }
    }

    pub async fn handle(&self, command: UpdateRelationship) -> Result<(), ApplicationError> {
        // 类型与取值先于角色查找校验
        let kind: RelationshipKind = command.relationship_type.parse()?;
        kind.check(command.value)?;

        self.tracker.update_relationship(
            &command.character_id,
            &command.target_id,
            kind,
            command.value,
        )?;

        tracing::info!(
            character_id = %command.character_id,
            target_id = %command.target_id,
            kind = %kind,
            value = command.value,
            "Relationship updated"
        );

        Ok(())
    }
}
