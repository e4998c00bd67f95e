//! Character Queries

use crate::domain::character::CharacterId;
use crate::domain::novel::NovelId;

/// 获取角色详情查询
#[derive(Debug, Clone)]
pub struct GetCharacter {
    pub character_id: CharacterId,
}

/// 列出角色查询，可限定所属小说
#[derive(Debug, Clone, Default)]
pub struct ListCharacters {
    pub novel_id: Option<NovelId>,
}

/// 关系分析查询
#[derive(Debug, Clone)]
pub struct AnalyzeRelationships {
    pub character_id: CharacterId,
    pub target_id: Option<CharacterId>,
}

/// 列出关系类型注册表查询
#[derive(Debug, Clone)]
pub struct ListRelationshipTypes;
