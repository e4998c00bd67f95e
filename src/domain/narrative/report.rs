//! Narrative Context - Reports
//!
//! 分析中发现的问题是数据而不是错误，统一收集到报告中返回

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// 情节校验问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotIssue {
    /// 与其他要素共用同一顺序值
    DuplicateOrder { element_id: String, order: i64 },
    /// 引用了不存在的章节
    UnknownChapter {
        element_id: String,
        chapter_id: String,
    },
}

impl std::fmt::Display for PlotIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotIssue::DuplicateOrder { element_id, order } => {
                write!(f, "Plot element {} shares order {}", element_id, order)
            }
            PlotIssue::UnknownChapter {
                element_id,
                chapter_id,
            } => write!(
                f,
                "Plot element {} references non-existent chapter {}",
                element_id, chapter_id
            ),
        }
    }
}

/// 章节中出现了未登记的角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterIssue {
    pub chapter_id: String,
    pub name: String,
}

/// 相邻事件日期倒退
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineIssue {
    pub previous_event: String,
    pub previous_date: NaiveDate,
    pub next_event: String,
    pub next_date: NaiveDate,
}

/// 章节违反世界观规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleIssue {
    pub rule: String,
    pub chapter_id: String,
    pub detail: String,
}

/// 相邻情节要素之间的顺序空缺
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotGap {
    pub from_element: String,
    pub from_order: i64,
    pub to_element: String,
    pub to_order: i64,
}

/// 单项检查结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult<I> {
    pub status: bool,
    pub issues: Vec<I>,
}

impl<I> CheckResult<I> {
    pub fn from_issues(issues: Vec<I>) -> Self {
        Self {
            status: issues.is_empty(),
            issues,
        }
    }
}

/// 时间线检查结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineCheck {
    pub status: bool,
    pub issues: Vec<TimelineIssue>,
    /// 按日期稳定排序后的事件 id
    pub chronology: Vec<String>,
}

/// 情节流分析（仅供参考，不影响其他结果）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotFlow {
    pub status: bool,
    pub plot_points: usize,
    pub gaps: Vec<PlotGap>,
}

/// 一致性分析报告
///
/// 四项检查相互独立，不提供汇总布尔值
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    pub character_consistency: CheckResult<CharacterIssue>,
    pub timeline_consistency: TimelineCheck,
    pub world_building_consistency: CheckResult<RuleIssue>,
    pub plot_flow: PlotFlow,
    pub analyzed_at: DateTime<Utc>,
}

impl ConsistencyReport {
    /// 忽略时间戳比较两份报告
    pub fn same_findings(&self, other: &ConsistencyReport) -> bool {
        self.character_consistency == other.character_consistency
            && self.timeline_consistency == other.timeline_consistency
            && self.world_building_consistency == other.world_building_consistency
            && self.plot_flow == other.plot_flow
    }
}
