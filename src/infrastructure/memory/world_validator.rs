//! In-Memory World Validator Implementation

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::application::ports::WorldValidatorPort;
use crate::domain::rules::{ElementRulePredicate, RelationshipPredicate};
use crate::domain::world::{
    validate_elements, ElementDraft, ElementPatch, ValidationReport, World, WorldDraft,
    WorldElement, WorldElementId, WorldError, WorldId, WorldPatch,
};

/// 内存世界观存储
///
/// 最近一次校验报告以"最后写入者为准"缓存
pub struct InMemoryWorldValidator {
    worlds: DashMap<WorldId, World>,
    elements: DashMap<WorldElementId, WorldElement>,
    rules: Arc<dyn ElementRulePredicate>,
    relationships: Arc<dyn RelationshipPredicate>,
    last_report: RwLock<Option<ValidationReport>>,
}

impl InMemoryWorldValidator {
    pub fn new(
        rules: Arc<dyn ElementRulePredicate>,
        relationships: Arc<dyn RelationshipPredicate>,
    ) -> Self {
        Self {
            worlds: DashMap::new(),
            elements: DashMap::new(),
            rules,
            relationships,
            last_report: RwLock::new(None),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl WorldValidatorPort for InMemoryWorldValidator {
    fn create_world(&self, draft: WorldDraft) -> Result<World, WorldError> {
        let world = World::new(draft)?;
        self.worlds.insert(*world.id(), world.clone());
        Ok(world)
    }

    fn get_world(&self, id: &WorldId) -> Result<World, WorldError> {
        self.worlds
            .get(id)
            .map(|w| w.clone())
            .ok_or(WorldError::WorldNotFound(*id))
    }

    fn list_worlds(&self) -> Vec<World> {
        let mut worlds: Vec<World> = self.worlds.iter().map(|e| e.value().clone()).collect();
        worlds.sort_by_key(|w| w.created_at());
        worlds
    }

    fn update_world(&self, id: &WorldId, patch: WorldPatch) -> Result<World, WorldError> {
        let mut world = self
            .worlds
            .get_mut(id)
            .ok_or(WorldError::WorldNotFound(*id))?;
        world.apply_patch(patch)?;
        Ok(world.clone())
    }

    fn delete_world(&self, id: &WorldId) -> Result<usize, WorldError> {
        self.worlds
            .remove(id)
            .ok_or(WorldError::WorldNotFound(*id))?;

        let before = self.elements.len();
        self.elements.retain(|_, e| e.world_id() != Some(id));
        Ok(before.saturating_sub(self.elements.len()))
    }

    fn create_element(&self, draft: ElementDraft) -> Result<WorldElement, WorldError> {
        // 插入期间持有世界观的读锁，删除世界观会等待插入完成后再清理要素
        let _world = match draft.world_id {
            Some(world_id) => Some(
                self.worlds
                    .get(&world_id)
                    .ok_or(WorldError::WorldNotFound(world_id))?,
            ),
            None => None,
        };

        let element = WorldElement::new(draft);
        self.elements.insert(*element.id(), element.clone());
        Ok(element)
    }

    fn get(&self, id: &WorldElementId) -> Result<WorldElement, WorldError> {
        self.elements
            .get(id)
            .map(|e| e.clone())
            .ok_or(WorldError::NotFound(*id))
    }

    fn list(
        &self,
        world_id: Option<&WorldId>,
        category: Option<&str>,
    ) -> Result<Vec<WorldElement>, WorldError> {
        if let Some(world_id) = world_id {
            if !self.worlds.contains_key(world_id) {
                return Err(WorldError::WorldNotFound(*world_id));
            }
        }

        let mut elements: Vec<WorldElement> = self
            .elements
            .iter()
            .filter(|entry| world_id.map_or(true, |w| entry.world_id() == Some(w)))
            .filter(|entry| category.map_or(true, |c| entry.category() == c))
            .map(|entry| entry.value().clone())
            .collect();
        elements.sort_by_key(|e| e.created_at());
        Ok(elements)
    }

    fn update(&self, id: &WorldElementId, patch: ElementPatch) -> Result<WorldElement, WorldError> {
        let mut element = self.elements.get_mut(id).ok_or(WorldError::NotFound(*id))?;
        element.apply_patch(patch);
        Ok(element.clone())
    }

    fn delete(&self, id: &WorldElementId) -> Result<(), WorldError> {
        self.elements.remove(id).ok_or(WorldError::NotFound(*id))?;
        Ok(())
    }

    fn validate(&self, id: Option<&WorldElementId>) -> Result<ValidationReport, WorldError> {
        let elements = match id {
            Some(id) => vec![self.get(id)?],
            None => self.list(None, None)?,
        };

        let report = validate_elements(&elements, self.rules.as_ref(), self.relationships.as_ref());
        tracing::debug!(
            elements = elements.len(),
            conflicts = report.conflicts.len(),
            "Caching world validation report"
        );

        *self.last_report.write() = Some(report.clone());
        Ok(report)
    }

    fn last_validation(&self) -> Option<ValidationReport> {
        self.last_report.read().clone()
    }
}
