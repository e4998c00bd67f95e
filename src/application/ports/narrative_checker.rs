//! Narrative Checker Port - 按小说隔离的一致性检查器

use serde::Serialize;

use crate::domain::narrative::{
    CheckerState, ConsistencyReport, NarrativeError, PlotIssue, StoryDraft, StoryStructure,
};
use crate::domain::novel::NovelId;

/// 情节校验结果
#[derive(Debug, Clone, Serialize)]
pub struct PlotValidation {
    pub valid: bool,
    pub issues: Vec<PlotIssue>,
}

/// 检查器状态与最近一次情节校验问题，两者取自同一时刻
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlotStatus {
    pub state: CheckerState,
    pub issues: Vec<PlotIssue>,
}

/// Narrative Checker Port
///
/// 每部小说拥有一个独立的检查器状态机
pub trait NarrativeCheckerPort: Send + Sync {
    /// 创建（或整体替换）故事结构
    fn create_structure(
        &self,
        novel_id: NovelId,
        draft: StoryDraft,
    ) -> Result<StoryStructure, NarrativeError>;

    /// 校验情节并保留问题列表
    fn validate_plot(&self, novel_id: NovelId) -> Result<PlotValidation, NarrativeError>;

    /// 一致性分析
    fn analyze_consistency(&self, novel_id: NovelId) -> Result<ConsistencyReport, NarrativeError>;

    /// 当前故事结构
    fn structure(&self, novel_id: NovelId) -> Result<StoryStructure, NarrativeError>;

    /// 检查器状态与保留的问题，未知小说视为 Uninitialized
    fn plot_status(&self, novel_id: NovelId) -> PlotStatus;

    /// 丢弃检查器，回到 Uninitialized
    fn discard(&self, novel_id: NovelId) -> bool;
}
