//! World Commands

use crate::domain::world::{
    ElementDraft, ElementPatch, WorldDraft, WorldElementId, WorldId, WorldPatch,
};

/// 创建世界观命令
#[derive(Debug, Clone)]
pub struct CreateWorld {
    pub draft: WorldDraft,
}

/// 更新世界观命令
#[derive(Debug, Clone)]
pub struct UpdateWorld {
    pub world_id: WorldId,
    pub patch: WorldPatch,
}

/// 删除世界观命令，其要素一并删除
#[derive(Debug, Clone)]
pub struct DeleteWorld {
    pub world_id: WorldId,
}

/// 创建世界观要素命令
#[derive(Debug, Clone)]
pub struct CreateWorldElement {
    pub draft: ElementDraft,
}

/// 更新世界观要素命令
#[derive(Debug, Clone)]
pub struct UpdateWorldElement {
    pub element_id: WorldElementId,
    pub patch: ElementPatch,
}

/// 删除世界观要素命令
#[derive(Debug, Clone)]
pub struct DeleteWorldElement {
    pub element_id: WorldElementId,
}

/// 世界观校验命令（结果覆盖缓存）
#[derive(Debug, Clone)]
pub struct ValidateWorld {
    pub element_id: Option<WorldElementId>,
}
