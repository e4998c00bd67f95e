//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::NovelError;

/// 小说唯一标识
///
/// 每部小说拥有独立的一致性检查器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NovelId(Uuid);

impl NovelId {
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

impl Default for NovelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NovelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 小说标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelTitle(String);

impl NovelTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, NovelError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(NovelError::InvalidTitle("标题不能为空".to_string()));
        }
        if trimmed.chars().count() > 200 {
            return Err(NovelError::InvalidTitle(
                "标题长度不能超过200字符".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NovelTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 小说写作状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NovelStatus {
    Draft,
    InProgress,
    Completed,
    Archived,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Draft => "draft",
            NovelStatus::InProgress => "in_progress",
            NovelStatus::Completed => "completed",
            NovelStatus::Archived => "archived",
        }
    }
}

impl Default for NovelStatus {
    fn default() -> Self {
        NovelStatus::Draft
    }
}

impl FromStr for NovelStatus {
    type Err = NovelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(NovelStatus::Draft),
            "in_progress" => Ok(NovelStatus::InProgress),
            "completed" => Ok(NovelStatus::Completed),
            "archived" => Ok(NovelStatus::Archived),
            other => Err(NovelError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for NovelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert_eq!(NovelTitle::new(" Ashfall ").unwrap().as_str(), "Ashfall");
        assert!(NovelTitle::new("  ").is_err());
        assert!(NovelTitle::new("x".repeat(201)).is_err());
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            NovelStatus::Draft,
            NovelStatus::InProgress,
            NovelStatus::Completed,
            NovelStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<NovelStatus>().unwrap(), status);
        }
        assert!(matches!(
            "published".parse::<NovelStatus>(),
            Err(NovelError::InvalidStatus(_))
        ));
    }
}
