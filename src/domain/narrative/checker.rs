//! Narrative Context - Consistency Checker
//!
//! 状态机: Uninitialized -> Structured -> Validated
//! - create_structure 可在任意状态调用，整体替换结构
//! - validate_plot / analyze_consistency 要求已创建结构

use super::{CheckerState, ConsistencyReport, NarrativeError, PlotIssue, StoryDraft, StoryStructure};
use crate::domain::rules::ChapterRulePredicate;

/// 叙事一致性检查器
#[derive(Debug, Clone, Default)]
pub struct NarrativeChecker {
    state: CheckerState,
    structure: Option<StoryStructure>,
    /// 最近一次 validate_plot 的问题列表
    plot_issues: Vec<PlotIssue>,
}

impl NarrativeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建故事结构
    ///
    /// 失败时保持原有结构和状态不变
    pub fn create_structure(
        &mut self,
        draft: StoryDraft,
    ) -> Result<&StoryStructure, NarrativeError> {
        let structure = StoryStructure::from_draft(draft)?;
        self.plot_issues.clear();
        self.state = CheckerState::Structured;
        Ok(self.structure.insert(structure))
    }

    /// 校验情节，每次调用都从头重建问题列表
    pub fn validate_plot(&mut self) -> Result<bool, NarrativeError> {
        let structure = self.structure.as_ref().ok_or(NarrativeError::NotStructured)?;
        self.plot_issues = structure.plot_issues();
        self.state = CheckerState::Validated;
        Ok(self.plot_issues.is_empty())
    }

    /// 一致性分析，不修改检查器状态
    pub fn analyze_consistency(
        &self,
        predicate: &dyn ChapterRulePredicate,
    ) -> Result<ConsistencyReport, NarrativeError> {
        let structure = self.structure.as_ref().ok_or(NarrativeError::NotStructured)?;
        Ok(structure.analyze(predicate))
    }

    pub fn state(&self) -> CheckerState {
        self.state
    }

    pub fn structure(&self) -> Option<&StoryStructure> {
        self.structure.as_ref()
    }

    pub fn plot_issues(&self) -> &[PlotIssue] {
        &self.plot_issues
    }
}
