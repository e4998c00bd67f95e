//! World Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ElementRelationship, WorldElementId, WorldId};

/// 创建世界观要素的输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementDraft {
    pub name: String,
    /// 所属世界观
    #[serde(default)]
    pub world_id: Option<WorldId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: Vec<ElementRelationship>,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// 世界观要素的部分更新
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub relationships: Option<Vec<ElementRelationship>>,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
}

/// WorldElement 聚合根
///
/// 同一分类下名称不要求唯一；只能通过 `apply_patch` 显式修改
#[derive(Debug, Clone, Serialize)]
pub struct WorldElement {
    id: WorldElementId,
    world_id: Option<WorldId>,
    name: String,
    description: String,
    category: String,
    attributes: Map<String, Value>,
    relationships: Vec<ElementRelationship>,
    rules: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorldElement {
    pub fn new(draft: ElementDraft) -> Self {
        let now = Utc::now();
        Self {
            id: WorldElementId::new(),
            world_id: draft.world_id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            attributes: draft.attributes,
            relationships: draft.relationships,
            rules: draft.rules,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: ElementPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(attributes) = patch.attributes {
            self.attributes = attributes;
        }
        if let Some(relationships) = patch.relationships {
            self.relationships = relationships;
        }
        if let Some(rules) = patch.rules {
            self.rules = rules;
        }
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &WorldElementId {
        &self.id
    }

    pub fn world_id(&self) -> Option<&WorldId> {
        self.world_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn relationships(&self) -> &[ElementRelationship] {
        &self.relationships
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
