//! Character Context - 角色限界上下文
//!
//! 职责:
//! - 角色档案管理
//! - 角色间有向关系评分
//! - 双向关系分析

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Character, CharacterProfile, ProfilePatch};
pub use errors::CharacterError;
pub use value_objects::{
    complete_scores, CharacterAge, CharacterId, CharacterName, RelationshipKind, RelationshipScores,
};
