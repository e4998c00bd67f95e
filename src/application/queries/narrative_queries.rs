//! Narrative Queries

use crate::domain::novel::NovelId;

/// 获取故事结构查询
#[derive(Debug, Clone)]
pub struct GetStructure {
    pub novel_id: NovelId,
}

/// 一致性分析查询
#[derive(Debug, Clone)]
pub struct AnalyzeConsistency {
    pub novel_id: NovelId,
}

/// 获取最近一次情节校验结果
#[derive(Debug, Clone)]
pub struct GetPlotIssues {
    pub novel_id: NovelId,
}
