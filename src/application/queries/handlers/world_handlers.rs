//! World Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::WorldValidatorPort;
use crate::application::queries::{
    GetLastValidation, GetWorld, GetWorldElement, ListWorldElements, ListWorlds,
};
use crate::domain::world::{ValidationReport, World, WorldElement};

/// GetWorld Handler
pub struct GetWorldHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl GetWorldHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, query: GetWorld) -> Result<World, ApplicationError> {
        Ok(self.validator.get_world(&query.world_id)?)
    }
}

/// ListWorlds Handler
pub struct ListWorldsHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl ListWorldsHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, _query: ListWorlds) -> Result<Vec<World>, ApplicationError> {
        Ok(self.validator.list_worlds())
    }
}

/// GetWorldElement Handler
pub struct GetWorldElementHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl GetWorldElementHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(&self, query: GetWorldElement) -> Result<WorldElement, ApplicationError> {
        Ok(self.validator.get(&query.element_id)?)
    }
}

/// ListWorldElements Handler
pub struct ListWorldElementsHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl ListWorldElementsHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    pub async fn handle(
        &self,
        query: ListWorldElements,
    ) -> Result<Vec<WorldElement>, ApplicationError> {
        let elements = self
            .validator
            .list(query.world_id.as_ref(), query.category.as_deref())?;
        Ok(elements)
    }
}

/// GetLastValidation Handler
pub struct GetLastValidationHandler {
    validator: Arc<dyn WorldValidatorPort>,
}

impl GetLastValidationHandler {
    pub fn new(validator: Arc<dyn WorldValidatorPort>) -> Self {
        Self { validator }
    }

    /// 尚未校验过时返回 None
    pub async fn handle(
        &self,
        _query: GetLastValidation,
    ) -> Result<Option<ValidationReport>, ApplicationError> {
        Ok(self.validator.last_validation())
    }
}
