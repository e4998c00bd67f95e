//! Character Tracker Port - 角色与关系存储
//!
//! 定义角色存储的抽象接口，具体实现在 infrastructure/memory 层

use std::collections::BTreeMap;

use crate::domain::character::{
    Character, CharacterError, CharacterId, CharacterName, CharacterProfile, ProfilePatch,
    RelationshipKind, RelationshipScores,
};
use crate::domain::novel::NovelId;

/// 关系分析结果：对方角色 -> 各关系类型评分
pub type RelationshipAnalysis = BTreeMap<CharacterId, RelationshipScores>;

/// Character Tracker Port
///
/// 独占角色表，外部只能通过这些操作读写
pub trait CharacterTrackerPort: Send + Sync {
    /// 创建并保存新角色
    fn create(&self, name: CharacterName, profile: CharacterProfile) -> Character;

    /// 获取角色
    fn get(&self, id: &CharacterId) -> Result<Character, CharacterError>;

    /// 按创建时间列出角色，指定小说时只返回属于它的角色
    fn list(&self, novel_id: Option<&NovelId>) -> Vec<Character>;

    /// 更新角色档案
    fn update_profile(
        &self,
        id: &CharacterId,
        patch: ProfilePatch,
    ) -> Result<Character, CharacterError>;

    /// 删除角色，同时清除其他角色指向它的关系
    fn delete(&self, id: &CharacterId) -> Result<(), CharacterError>;

    /// 解除所有角色与该小说的关联，返回受影响的角色数
    fn detach_novel(&self, novel_id: &NovelId) -> usize;

    /// 关系分析
    ///
    /// - 指定 target: 返回单向关系
    /// - 未指定: 返回与其他所有角色的双向平均关系
    fn analyze(
        &self,
        id: &CharacterId,
        target: Option<&CharacterId>,
    ) -> Result<RelationshipAnalysis, CharacterError>;

    /// 设置单个关系类型的评分
    ///
    /// 与删除 `target` 并发时，要么返回 NotFound，要么关系在删除时被清除
    fn update_relationship(
        &self,
        id: &CharacterId,
        target: &CharacterId,
        kind: RelationshipKind,
        value: f64,
    ) -> Result<(), CharacterError>;
}
