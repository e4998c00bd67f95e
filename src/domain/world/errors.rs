//! World Context - Errors

use thiserror::Error;

use super::{WorldElementId, WorldId};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("世界观要素不存在: {0}")]
    NotFound(WorldElementId),

    #[error("世界观不存在: {0}")]
    WorldNotFound(WorldId),

    #[error("无效的世界观: {0}")]
    InvalidWorld(String),
}
