//! World Context - 世界观设定

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{WorldError, WorldId};

const MAX_TITLE_CHARS: usize = 200;

/// 创建世界观的输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub magic_system: Option<String>,
    #[serde(default)]
    pub technology_level: Option<String>,
    #[serde(default)]
    pub social_structure: Option<String>,
    #[serde(default)]
    pub rules_and_laws: Option<String>,
}

/// 世界观的部分更新
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub magic_system: Option<String>,
    #[serde(default)]
    pub technology_level: Option<String>,
    #[serde(default)]
    pub social_structure: Option<String>,
    #[serde(default)]
    pub rules_and_laws: Option<String>,
}

/// World 聚合根，世界观要素的容器
///
/// 不变量:
/// - 标题非空且不超过 200 字符
/// - 描述非空
#[derive(Debug, Clone, Serialize)]
pub struct World {
    id: WorldId,
    title: String,
    description: String,
    time_period: Option<String>,
    geography: Option<String>,
    culture: Option<String>,
    magic_system: Option<String>,
    technology_level: Option<String>,
    social_structure: Option<String>,
    rules_and_laws: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn check_title(title: &str) -> Result<String, WorldError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(WorldError::InvalidWorld("标题不能为空".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(WorldError::InvalidWorld(
            "标题长度不能超过200字符".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn check_description(description: &str) -> Result<(), WorldError> {
    if description.trim().is_empty() {
        return Err(WorldError::InvalidWorld("描述不能为空".to_string()));
    }
    Ok(())
}

impl World {
    pub fn new(draft: WorldDraft) -> Result<Self, WorldError> {
        let title = check_title(&draft.title)?;
        check_description(&draft.description)?;

        let now = Utc::now();
        Ok(Self {
            id: WorldId::new(),
            title,
            description: draft.description,
            time_period: draft.time_period,
            geography: draft.geography,
            culture: draft.culture,
            magic_system: draft.magic_system,
            technology_level: draft.technology_level,
            social_structure: draft.social_structure,
            rules_and_laws: draft.rules_and_laws,
            created_at: now,
            updated_at: now,
        })
    }

    /// 应用更新，校验失败时不留下部分修改
    pub fn apply_patch(&mut self, patch: WorldPatch) -> Result<(), WorldError> {
        let title = patch.title.as_deref().map(check_title).transpose()?;
        if let Some(description) = &patch.description {
            check_description(description)?;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        let settings = [
            (&mut self.time_period, patch.time_period),
            (&mut self.geography, patch.geography),
            (&mut self.culture, patch.culture),
            (&mut self.magic_system, patch.magic_system),
            (&mut self.technology_level, patch.technology_level),
            (&mut self.social_structure, patch.social_structure),
            (&mut self.rules_and_laws, patch.rules_and_laws),
        ];
        for (field, value) in settings {
            if value.is_some() {
                *field = value;
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &WorldId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn time_period(&self) -> Option<&str> {
        self.time_period.as_deref()
    }

    pub fn geography(&self) -> Option<&str> {
        self.geography.as_deref()
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn magic_system(&self) -> Option<&str> {
        self.magic_system.as_deref()
    }

    pub fn technology_level(&self) -> Option<&str> {
        self.technology_level.as_deref()
    }

    pub fn social_structure(&self) -> Option<&str> {
        self.social_structure.as_deref()
    }

    pub fn rules_and_laws(&self) -> Option<&str> {
        self.rules_and_laws.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
