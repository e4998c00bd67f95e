//! Novel Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateNovel, DeleteNovel, UpdateNovel};
use crate::application::error::ApplicationError;
use crate::application::ports::{CharacterTrackerPort, NarrativeCheckerPort, NovelRepositoryPort};
use crate::domain::novel::{Novel, NovelDraft, NovelPatch, NovelStatus};

// ============================================================================
// CreateNovel
// ============================================================================

/// CreateNovel Handler
pub struct CreateNovelHandler {
    novels: Arc<dyn NovelRepositoryPort>,
}

impl CreateNovelHandler {
    pub fn new(novels: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novels }
    }

    pub async fn handle(&self, command: CreateNovel) -> Result<Novel, ApplicationError> {
        let status = command
            .status
            .as_deref()
            .map(str::parse::<NovelStatus>)
            .transpose()?
            .unwrap_or_default();

        let novel = self.novels.create(NovelDraft {
            title: command.title,
            description: command.description,
            genre: command.genre,
            status,
            is_public: command.is_public,
            language: command.language,
            tags: command.tags,
        })?;

        tracing::info!(novel_id = %novel.id(), title = %novel.title(), "Novel created");

        Ok(novel)
    }
}

// ============================================================================
// UpdateNovel
// ============================================================================

/// UpdateNovel Handler
pub struct UpdateNovelHandler {
    novels: Arc<dyn NovelRepositoryPort>,
}

impl UpdateNovelHandler {
    pub fn new(novels: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novels }
    }

    pub async fn handle(&self, command: UpdateNovel) -> Result<Novel, ApplicationError> {
        let patch = NovelPatch {
            title: command.title,
            description: command.description,
            genre: command.genre,
            status: command
                .status
                .as_deref()
                .map(str::parse::<NovelStatus>)
                .transpose()?,
            is_public: command.is_public,
            language: command.language,
            tags: command.tags,
        };

        let novel = self.novels.update(&command.novel_id, patch)?;

        tracing::info!(novel_id = %novel.id(), "Novel updated");

        Ok(novel)
    }
}

// ============================================================================
// DeleteNovel
// ============================================================================

/// DeleteNovel Handler
///
/// 删除小说后丢弃其叙事检查器，并解除角色的归属（角色本身保留）
pub struct DeleteNovelHandler {
    novels: Arc<dyn NovelRepositoryPort>,
    checker: Arc<dyn NarrativeCheckerPort>,
    tracker: Arc<dyn CharacterTrackerPort>,
}

impl DeleteNovelHandler {
    pub fn new(
        novels: Arc<dyn NovelRepositoryPort>,
        checker: Arc<dyn NarrativeCheckerPort>,
        tracker: Arc<dyn CharacterTrackerPort>,
    ) -> Self {
        Self {
            novels,
            checker,
            tracker,
        }
    }

    pub async fn handle(&self, command: DeleteNovel) -> Result<(), ApplicationError> {
        let novel_id = command.novel_id;
        self.novels.delete(&novel_id)?;

        let discarded = self.checker.discard(novel_id);
        let detached = self.tracker.detach_novel(&novel_id);

        tracing::info!(
            novel_id = %novel_id,
            structure_discarded = discarded,
            characters_detached = detached,
            "Novel deleted"
        );

        Ok(())
    }
}
