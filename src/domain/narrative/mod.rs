//! Narrative Context - 叙事限界上下文
//!
//! 职责:
//! - 故事结构聚合（情节、章节、角色名单、世界观、时间线）
//! - 情节校验
//! - 一致性分析

mod aggregate;
mod checker;
mod entities;
mod errors;
mod report;
mod value_objects;

pub use aggregate::{ChapterDraft, PlotElementDraft, StoryDraft, StoryStructure};
pub use checker::NarrativeChecker;
pub use entities::{Chapter, PlotElement, StoryCharacter, TimelineEvent, WorldBuilding, WorldRule};
pub use errors::NarrativeError;
pub use report::{
    CharacterIssue, CheckResult, ConsistencyReport, PlotFlow, PlotGap, PlotIssue, RuleIssue,
    TimelineCheck, TimelineIssue,
};
pub use value_objects::CheckerState;
