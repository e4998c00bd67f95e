//! World Queries

use crate::domain::world::{WorldElementId, WorldId};

/// 获取世界观查询
#[derive(Debug, Clone)]
pub struct GetWorld {
    pub world_id: WorldId,
}

/// 列出所有世界观查询
#[derive(Debug, Clone)]
pub struct ListWorlds;

/// 获取世界观要素查询
#[derive(Debug, Clone)]
pub struct GetWorldElement {
    pub element_id: WorldElementId,
}

/// 列出世界观要素查询，可按世界观与分类过滤
#[derive(Debug, Clone, Default)]
pub struct ListWorldElements {
    pub world_id: Option<WorldId>,
    pub category: Option<String>,
}

/// 获取最近一次世界观校验报告
#[derive(Debug, Clone)]
pub struct GetLastValidation;
