//! Character Commands

use std::collections::BTreeMap;

use crate::domain::character::CharacterId;
use crate::domain::novel::NovelId;

/// 创建角色命令
#[derive(Debug, Clone, Default)]
pub struct CreateCharacter {
    /// 所属小说，指定时必须存在
    pub novel_id: Option<NovelId>,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub personality: BTreeMap<String, f64>,
    pub background: Option<String>,
    pub appearance: BTreeMap<String, String>,
    pub skills: Vec<String>,
}

/// 更新角色档案命令
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacter {
    pub character_id: CharacterId,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub personality: Option<BTreeMap<String, f64>>,
    pub background: Option<String>,
    pub appearance: Option<BTreeMap<String, String>>,
    pub skills: Option<Vec<String>>,
}

/// 删除角色命令
#[derive(Debug, Clone)]
pub struct DeleteCharacter {
    pub character_id: CharacterId,
}

/// 更新关系评分命令
#[derive(Debug, Clone)]
pub struct UpdateRelationship {
    pub character_id: CharacterId,
    pub target_id: CharacterId,
    /// 关系类型名称，由处理器解析
    pub relationship_type: String,
    pub value: f64,
}
