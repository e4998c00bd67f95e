//! Novel Commands

use crate::domain::novel::NovelId;

/// 创建小说命令
#[derive(Debug, Clone, Default)]
pub struct CreateNovel {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    /// 状态名称，由处理器解析，缺省为 draft
    pub status: Option<String>,
    pub is_public: bool,
    pub language: Option<String>,
    pub tags: Vec<String>,
}

/// 更新小说命令
#[derive(Debug, Clone, Default)]
pub struct UpdateNovel {
    pub novel_id: NovelId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub is_public: Option<bool>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// 删除小说命令
///
/// 同时丢弃其叙事检查器，并解除角色的归属
#[derive(Debug, Clone)]
pub struct DeleteNovel {
    pub novel_id: NovelId,
}
