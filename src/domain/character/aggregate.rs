//! Character Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    complete_scores, CharacterAge, CharacterError, CharacterId, CharacterName, RelationshipKind,
    RelationshipScores,
};
use crate::domain::novel::NovelId;

/// 创建角色时的可选档案字段
#[derive(Debug, Clone, Default)]
pub struct CharacterProfile {
    pub novel_id: Option<NovelId>,
    pub age: Option<CharacterAge>,
    pub gender: Option<String>,
    pub personality: BTreeMap<String, f64>,
    pub background: Option<String>,
    pub appearance: BTreeMap<String, String>,
    pub skills: Vec<String>,
}

/// 角色档案的部分更新，`None` 表示保持不变
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<CharacterAge>,
    pub gender: Option<String>,
    pub personality: Option<BTreeMap<String, f64>>,
    pub background: Option<String>,
    pub appearance: Option<BTreeMap<String, String>>,
    pub skills: Option<Vec<String>>,
}

/// Character 聚合根
///
/// 不变量:
/// - 名称非空
/// - 年龄在 0 到 1000 之间
/// - 每条关系评分都落在对应关系类型的范围内
/// - 关系只能通过 `set_relationship` 修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    novel_id: Option<NovelId>,
    age: Option<CharacterAge>,
    gender: Option<String>,
    personality: BTreeMap<String, f64>,
    background: Option<String>,
    appearance: BTreeMap<String, String>,
    skills: Vec<String>,
    relationships: BTreeMap<CharacterId, RelationshipScores>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Character {
    /// 创建新角色
    pub fn new(name: CharacterName, profile: CharacterProfile) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name,
            novel_id: profile.novel_id,
            age: profile.age,
            gender: profile.gender,
            personality: profile.personality,
            background: profile.background,
            appearance: profile.appearance,
            skills: profile.skills,
            relationships: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 设置指向 `target` 的某一类关系评分
    ///
    /// 只修改这一个类型，同一对角色的其他类型保持不变
    pub fn set_relationship(
        &mut self,
        target: CharacterId,
        kind: RelationshipKind,
        value: f64,
    ) -> Result<(), CharacterError> {
        kind.check(value)?;
        if target == self.id {
            return Err(CharacterError::SelfRelationship(target));
        }

        self.relationships
            .entry(target)
            .or_default()
            .insert(kind, value);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 删除指向 `target` 的全部关系
    pub fn forget(&mut self, target: &CharacterId) -> bool {
        let removed = self.relationships.remove(target).is_some();
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// 解除与所属小说的关联
    pub fn detach_novel(&mut self) {
        if self.novel_id.take().is_some() {
            self.updated_at = Utc::now();
        }
    }

    /// 应用档案更新
    pub fn apply_patch(&mut self, patch: ProfilePatch) -> Result<(), CharacterError> {
        // 先校验名称，失败时不留下部分修改
        let name = patch.name.map(CharacterName::new).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        if let Some(personality) = patch.personality {
            self.personality = personality;
        }
        if let Some(background) = patch.background {
            self.background = Some(background);
        }
        if let Some(appearance) = patch.appearance {
            self.appearance = appearance;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 指向 `target` 的单向关系，覆盖全部关系类型
    pub fn relationship_with(&self, target: &CharacterId) -> RelationshipScores {
        complete_scores(self.relationships.get(target))
    }

    /// 与 `other` 的双向关系视图
    ///
    /// 每个类型取正向与反向评分的平均值，缺失的一侧按 0.0 计
    pub fn mutual_view(&self, other: &Character) -> RelationshipScores {
        let forward = self.relationships.get(&other.id);
        let reverse = other.relationships.get(&self.id);

        RelationshipKind::ALL
            .iter()
            .map(|kind| {
                let a = forward.and_then(|s| s.get(kind)).copied().unwrap_or(0.0);
                let b = reverse.and_then(|s| s.get(kind)).copied().unwrap_or(0.0);
                (*kind, (a + b) / 2.0)
            })
            .collect()
    }

    // Getters
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn novel_id(&self) -> Option<&NovelId> {
        self.novel_id.as_ref()
    }

    pub fn age(&self) -> Option<u32> {
        self.age.map(|age| age.value())
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn personality(&self) -> &BTreeMap<String, f64> {
        &self.personality
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn appearance(&self) -> &BTreeMap<String, String> {
        &self.appearance
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn relationships(&self) -> &BTreeMap<CharacterId, RelationshipScores> {
        &self.relationships
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
