//! Character Context - Value Objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

use super::CharacterError;

/// 角色唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(Uuid);

impl CharacterId {
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

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 角色名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(name: impl Into<String>) -> Result<Self, CharacterError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CharacterError::InvalidName("角色名称不能为空".to_string()));
        }
        if trimmed.chars().count() > 100 {
            return Err(CharacterError::InvalidName(
                "角色名称长度不能超过100字符".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 角色年龄，0 到 1000 之间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAge(u32);

impl CharacterAge {
    pub const MAX: u32 = 1000;

    pub fn new(age: u32) -> Result<Self, CharacterError> {
        if age > Self::MAX {
            return Err(CharacterError::InvalidAge(age));
        }
        Ok(Self(age))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// 关系类型
///
/// 固定注册表，每个类型对应一个闭区间取值范围，运行时不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Friendship,
    Rivalry,
    Romance,
    Family,
    Mentor,
}

impl RelationshipKind {
    /// 全部已注册的关系类型
    pub const ALL: [RelationshipKind; 5] = [
        RelationshipKind::Friendship,
        RelationshipKind::Rivalry,
        RelationshipKind::Romance,
        RelationshipKind::Family,
        RelationshipKind::Mentor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendship => "friendship",
            Self::Rivalry => "rivalry",
            Self::Romance => "romance",
            Self::Family => "family",
            Self::Mentor => "mentor",
        }
    }

    /// 取值范围 (min, max)，两端包含
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Rivalry => (-1.0, 1.0),
            Self::Friendship | Self::Romance | Self::Family | Self::Mentor => (0.0, 1.0),
        }
    }

    /// 校验取值是否落在该类型的范围内
    pub fn check(&self, value: f64) -> Result<(), CharacterError> {
        let (min, max) = self.range();
        if !(min..=max).contains(&value) {
            return Err(CharacterError::ValueOutOfRange {
                kind: *self,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl FromStr for RelationshipKind {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendship" => Ok(Self::Friendship),
            "rivalry" => Ok(Self::Rivalry),
            "romance" => Ok(Self::Romance),
            "family" => Ok(Self::Family),
            "mentor" => Ok(Self::Mentor),
            other => Err(CharacterError::UnknownRelationshipType(other.to_string())),
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 某一方向上的关系评分（关系类型 -> 分值）
pub type RelationshipScores = BTreeMap<RelationshipKind, f64>;

/// 返回覆盖全部关系类型的评分表，缺失的类型补 0.0
pub fn complete_scores(scores: Option<&RelationshipScores>) -> RelationshipScores {
    RelationshipKind::ALL
        .iter()
        .map(|kind| {
            let value = scores.and_then(|s| s.get(kind)).copied().unwrap_or(0.0);
            (*kind, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = CharacterName::new("  Aria ").unwrap();
        assert_eq!(name.as_str(), "Aria");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(CharacterName::new("   ").is_err());
        assert!(CharacterName::new("").is_err());
    }

    #[test]
    fn test_age_upper_bound_is_inclusive() {
        assert_eq!(CharacterAge::new(0).unwrap().value(), 0);
        assert_eq!(CharacterAge::new(1000).unwrap().value(), 1000);
        assert!(matches!(
            CharacterAge::new(1001),
            Err(CharacterError::InvalidAge(1001))
        ));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(RelationshipKind::Friendship.check(0.0).is_ok());
        assert!(RelationshipKind::Friendship.check(1.0).is_ok());
        assert!(RelationshipKind::Friendship.check(1.2).is_err());
        assert!(RelationshipKind::Friendship.check(-0.1).is_err());
        assert!(RelationshipKind::Rivalry.check(-1.0).is_ok());
        assert!(RelationshipKind::Rivalry.check(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "mentor".parse::<RelationshipKind>().unwrap(),
            RelationshipKind::Mentor
        );
        assert!(matches!(
            "nemesis".parse::<RelationshipKind>(),
            Err(CharacterError::UnknownRelationshipType(_))
        ));
    }

    #[test]
    fn test_complete_scores_fills_missing_kinds() {
        let mut partial = RelationshipScores::new();
        partial.insert(RelationshipKind::Romance, 0.3);

        let full = complete_scores(Some(&partial));
        assert_eq!(full.len(), RelationshipKind::ALL.len());
        assert_eq!(full[&RelationshipKind::Romance], 0.3);
        assert_eq!(full[&RelationshipKind::Friendship], 0.0);
    }
}
