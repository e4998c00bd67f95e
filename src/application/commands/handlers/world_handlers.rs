//! World Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CreateWorld, CreateWorldElement, DeleteWorld, DeleteWorldElement, UpdateWorld,
    UpdateWorldElement, ValidateWorld,
};
use crate::application::error::ApplicationError;
use crate::application::ports::WorldValidatorPort;
use crate::domain::world::{ValidationReport, World, WorldElement};

// ============================================================================
// CreateWorld
// ============================================================================

/// CreateWorld Handler
pub struct CreateWorldHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl CreateWorldHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, command: CreateWorld) -> Result<World, ApplicationError> {
        let world = self.validator.create_world(command.draft)?;

        tracing::info!(world_id = %world.id(), title = %world.title(), "World created");

        Ok(world)
    }
}

// ============================================================================
// UpdateWorld
// ============================================================================

/// UpdateWorld Handler
pub struct UpdateWorldHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl UpdateWorldHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, command: UpdateWorld) -> Result<World, ApplicationError> {
        let world = self
            .validator
            .update_world(&command.world_id, command.patch)?;

        tracing::info!(world_id = %world.id(), "World updated");

        Ok(world)
    }
}

// ============================================================================
// DeleteWorld
// ============================================================================

/// DeleteWorld Handler
pub struct DeleteWorldHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl DeleteWorldHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, command: DeleteWorld) -> Result<(), ApplicationError> {
        let removed = self.validator.delete_world(&command.world_id)?;

        tracing::info!(
            world_id = %command.world_id,
            elements_removed = removed,
            "World deleted"
        );

        Ok(())
    }
}

// ============================================================================
// CreateWorldElement
// ============================================================================

/// CreateWorldElement Handler
pub struct CreateWorldElementHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl CreateWorldElementHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(
        &self,
        command: CreateWorldElement,
    ) -> Result<WorldElement, ApplicationError> {
        let element = self.validator.create_element(command.draft)?;

        tracing::info!(
            element_id = %element.id(),
            name = %element.name(),
            category = %element.category(),
            "World element created"
        );

        Ok(element)
    }
}

// ============================================================================
// UpdateWorldElement
// ============================================================================

/// UpdateWorldElement Handler
pub struct UpdateWorldElementHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl UpdateWorldElementHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(
        &self,
        command: UpdateWorldElement,
    ) -> Result<WorldElement, ApplicationError> {
        let element = self.validator.update(&command.element_id, command.patch)?;

        tracing::info!(element_id = %element.id(), "World element updated");

        Ok(element)
    }
}

// ============================================================================
// DeleteWorldElement
// ============================================================================

/// DeleteWorldElement Handler
pub struct DeleteWorldElementHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl DeleteWorldElementHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, command: DeleteWorldElement) -> Result<(), ApplicationError> {
        self.validator.delete(&command.element_id)?;

        tracing::info!(element_id = %command.element_id, "World element deleted");

        Ok(())
    }
}

// ============================================================================
// ValidateWorld
// ============================================================================

/// ValidateWorld Handler
pub struct ValidateWorldHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl ValidateWorldHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(
        &self,
        command: ValidateWorld,
    ) -> Result<ValidationReport, ApplicationError> {
        let report = self.validator.validate(command.element_id.as_ref())?;

        if report.is_valid {
            tracing::info!(
                warnings = report.warnings.len(),
                "World consistency validated"
            );
        } else {
            tracing::warn!(
                conflicts = report.conflicts.len(),
                warnings = report.warnings.len(),
                "World consistency conflicts found"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::world::{ElementDraft, WorldDraft, WorldElementId, WorldId};
    use crate::domain::PermissiveRules;
    use crate::infrastructure::memory::InMemoryWorldValidator;

    fn validator() -> Arc<dyn WorldValidatorPort> {
        let rules = Arc::new(PermissiveRules);
        Arc::new(InMemoryWorldValidator::new(rules.clone(), rules))
    }

    #[tokio::test]
    async fn test_validate_unknown_element_is_not_found() {
        let handler = ValidateWorldHandler::new(validator());
        let result = handler
            .handle(ValidateWorld {
                element_id: Some(WorldElementId::new()),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_then_validate_all() {
        let validator = validator();
        CreateWorldElementHandler::new(validator.clone())
            .handle(CreateWorldElement {
                draft: ElementDraft {
                    name: "Ashfall".to_string(),
                    rules: vec!["no-flight".to_string()],
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let report = ValidateWorldHandler::new(validator.clone())
            .handle(ValidateWorld { element_id: None })
            .await
            .unwrap();
        assert!(report.is_valid);
        assert!(validator.last_validation().is_some());
    }

    #[tokio::test]
    async fn test_world_owns_its_elements() {
        let validator = validator();
        let world = CreateWorldHandler::new(validator.clone())
            .handle(CreateWorld {
                draft: WorldDraft {
                    title: "Eternal".to_string(),
                    description: "Floating cities".to_string(),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let create = CreateWorldElementHandler::new(validator.clone());
        create
            .handle(CreateWorldElement {
                draft: ElementDraft {
                    name: "Valdris".to_string(),
                    world_id: Some(*world.id()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        let orphan = create
            .handle(CreateWorldElement {
                draft: ElementDraft {
                    name: "Rift".to_string(),
                    world_id: Some(WorldId::new()),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(
            orphan,
            Err(ApplicationError::NotFound {
                resource_type: "World",
                ..
            })
        ));

        let delete = DeleteWorldHandler::new(validator.clone());
        delete
            .handle(DeleteWorld {
                world_id: *world.id(),
            })
            .await
            .unwrap();
        assert!(validator.list(None, None).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_world_title_is_validation_error() {
        let handler = CreateWorldHandler::new(validator());
        let result = handler
            .handle(CreateWorld {
                draft: WorldDraft {
                    title: " ".to_string(),
                    description: "Floating cities".to_string(),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));

        let update = UpdateWorldHandler::new(validator());
        let missing = update
            .handle(UpdateWorld {
                world_id: WorldId::new(),
                patch: Default::default(),
            })
            .await;
        assert!(matches!(missing, Err(ApplicationError::NotFound { .. })));
    }
}
