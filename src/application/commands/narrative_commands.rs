//! Narrative Commands

use crate::domain::narrative::StoryDraft;
use crate::domain::novel::NovelId;

/// 创建故事结构命令
#[derive(Debug, Clone)]
pub struct CreateStructure {
    pub novel_id: NovelId,
    pub draft: StoryDraft,
}

/// 情节校验命令（会保留问题列表，因此属于写操作）
#[derive(Debug, Clone)]
pub struct ValidatePlot {
    pub novel_id: NovelId,
}

/// 丢弃故事结构命令
#[derive(Debug, Clone)]
pub struct DiscardStructure {
    pub novel_id: NovelId,
}
