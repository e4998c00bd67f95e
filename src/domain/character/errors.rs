//! Character Context - Errors

use thiserror::Error;

use super::{CharacterId, RelationshipKind};

#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("角色不存在: {0}")]
    NotFound(CharacterId),

    #[error("无效的角色名称: {0}")]
    InvalidName(String),

    #[error("无效的角色年龄: {0}，必须在 0 到 1000 之间")]
    InvalidAge(u32),

    #[error("未知的关系类型: {0}")]
    UnknownRelationshipType(String),

    #[error("关系值超出范围: {kind} = {value}，必须在 {min} 到 {max} 之间")]
    ValueOutOfRange {
        kind: RelationshipKind,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("角色不能与自身建立关系: {0}")]
    SelfRelationship(CharacterId),
}
