//! World Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 世界观唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(Uuid);

impl WorldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 世界观要素唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldElementId(Uuid);

impl WorldElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WorldElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorldElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 要素之间的关系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRelationship {
    /// 关系类型，如 "located_in"、"rules_over"
    pub kind: String,
    /// 关联的要素
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<WorldElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
