//! Novel Queries

use crate::domain::novel::NovelId;

/// 获取小说查询
#[derive(Debug, Clone)]
pub struct GetNovel {
    pub novel_id: NovelId,
}

/// 列出所有小说查询
#[derive(Debug, Clone)]
pub struct ListNovels;
