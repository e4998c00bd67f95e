//! Narrative Command Handlers
//!
//! 叙事检查器按小说隔离，所有命令先确认小说存在

use std::sync::Arc;

use crate::application::commands::{CreateStructure, DiscardStructure, ValidatePlot};
use crate::application::error::ApplicationError;
use crate::application::ports::{NarrativeCheckerPort, NovelRepositoryPort, PlotValidation};
use crate::domain::narrative::StoryStructure;

// ============================================================================
// CreateStructure
// ============================================================================

/// CreateStructure Handler
pub struct CreateStructureHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl CreateStructureHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(
        &self,
        command: CreateStructure,
    ) -> Result<StoryStructure, ApplicationError> {
        let novel_id = command.novel_id;
        self.novels.ensure_exists(&novel_id)?;

        let structure = self
            .checker
            .create_structure(novel_id, command.draft)
            .map_err(|e| {
                tracing::warn!(novel_id = %novel_id, error = %e, "Story structure rejected");
                ApplicationError::from(e)
            })?;

        // 小说在创建期间被删除时，不留下无主的检查器
        if let Err(e) = self.novels.ensure_exists(&novel_id) {
            self.checker.discard(novel_id);
            return Err(e.into());
        }

        tracing::info!(
            novel_id = %novel_id,
            plot_elements = structure.plot_elements().len(),
            chapters = structure.chapters().len(),
            timeline_events = structure.timeline().len(),
            "Story structure created"
        );

        Ok(structure)
    }
}

// ============================================================================
// ValidatePlot
// ============================================================================

/// ValidatePlot Handler
pub struct ValidatePlotHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl ValidatePlotHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(&self, command: ValidatePlot) -> Result<PlotValidation, ApplicationError> {
        self.novels.ensure_exists(&command.novel_id)?;
        let validation = self.checker.validate_plot(command.novel_id)?;

        tracing::info!(
            novel_id = %command.novel_id,
            valid = validation.valid,
            issues = validation.issues.len(),
            "Plot validated"
        );

        Ok(validation)
    }
}

// ============================================================================
// DiscardStructure
// ============================================================================

/// DiscardStructure Handler
pub struct DiscardStructureHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl DiscardStructureHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(&self, command: DiscardStructure) -> Result<(), ApplicationError> {
        self.novels.ensure_exists(&command.novel_id)?;
        if !self.checker.discard(command.novel_id) {
            return Err(ApplicationError::not_found(
                "StoryStructure",
                *command.novel_id.as_uuid(),
            ));
        }

        tracing::info!(novel_id = %command.novel_id, "Story structure discarded");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::{PlotElementDraft, StoryDraft};
    use crate::domain::novel::{NovelDraft, NovelId};
    use crate::domain::PermissiveRules;
    use crate::infrastructure::memory::{InMemoryNarrativeChecker, InMemoryNovelRepository};

    struct Fixture {
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
        novel_id: NovelId,
    }

    fn fixture() -> Fixture {
        let novels: Arc<dyn NovelRepositoryPort> = Arc::new(InMemoryNovelRepository::new());
        let novel = novels
            .create(NovelDraft {
                title: "Ashfall".to_string(),
                ..Default::default()
            })
            .unwrap();
        Fixture {
            checker: Arc::new(InMemoryNarrativeChecker::new(Arc::new(PermissiveRules))),
            novels,
            novel_id: *novel.id(),
        }
    }

    fn draft(orders: &[i64]) -> StoryDraft {
        StoryDraft {
            plot_elements: orders
                .iter()
                .enumerate()
                .map(|(i, order)| PlotElementDraft {
                    id: format!("p{}", i + 1),
                    title: "beat".to_string(),
                    description: String::new(),
                    order: *order,
                    chapter_id: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_validate_before_structure_is_invalid_state() {
        let f = fixture();
        let handler = ValidatePlotHandler::new(f.checker, f.novels);
        let result = handler
            .handle(ValidatePlot {
                novel_id: f.novel_id,
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
    }

    #[tokio::test]
    async fn test_unknown_novel_is_not_found() {
        let f = fixture();
        let create = CreateStructureHandler::new(f.checker.clone(), f.novels.clone());
        let result = create
            .handle(CreateStructure {
                novel_id: NovelId::new(),
                draft: draft(&[1]),
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::NotFound {
                resource_type: "Novel",
                ..
            })
        ));

        let validate = ValidatePlotHandler::new(f.checker, f.novels);
        let result = validate
            .handle(ValidatePlot {
                novel_id: NovelId::new(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_orders_fail_validation() {
        let f = fixture();
        let novel_id = f.novel_id;
        CreateStructureHandler::new(f.checker.clone(), f.novels.clone())
            .handle(CreateStructure {
                novel_id,
                draft: draft(&[1, 2, 2]),
            })
            .await
            .unwrap();

        let validation = ValidatePlotHandler::new(f.checker, f.novels)
            .handle(ValidatePlot { novel_id })
            .await
            .unwrap();
        assert!(!validation.valid);
        assert_eq!(validation.issues.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_structure_is_validation_error() {
        let f = fixture();
        let handler = CreateStructureHandler::new(f.checker, f.novels);
        let result = handler
            .handle(CreateStructure {
                novel_id: f.novel_id,
                draft: draft(&[-1]),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_discard_without_structure_is_not_found() {
        let f = fixture();
        let handler = DiscardStructureHandler::new(f.checker, f.novels);
        let result = handler
            .handle(DiscardStructure {
                novel_id: f.novel_id,
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::NotFound {
                resource_type: "StoryStructure",
                ..
            })
        ));
    }
}
