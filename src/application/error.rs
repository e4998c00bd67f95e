//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::domain::character::CharacterError;
use crate::domain::narrative::NarrativeError;
use crate::domain::novel::NovelError;
use crate::domain::world::WorldError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效（前置条件未满足）
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl From<CharacterError> for ApplicationError {
    fn from(err: CharacterError) -> Self {
        match err {
            CharacterError::NotFound(id) => Self::not_found("Character", *id.as_uuid()),
            other => Self::validation(other.to_string()),
        }
    }
}

impl From<NarrativeError> for ApplicationError {
    fn from(err: NarrativeError) -> Self {
        match err {
            NarrativeError::NotStructured => Self::invalid_state(err.to_string()),
            other => Self::validation(other.to_string()),
        }
    }
}

impl From<NovelError> for ApplicationError {
    fn from(err: NovelError) -> Self {
        match err {
            NovelError::NotFound(id) => Self::not_found("Novel", *id.as_uuid()),
            other => Self::validation(other.to_string()),
        }
    }
}

impl From<WorldError> for ApplicationError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::NotFound(id) => Self::not_found("WorldElement", *id.as_uuid()),
            WorldError::WorldNotFound(id) => Self::not_found("World", *id.as_uuid()),
            WorldError::InvalidWorld(_) => Self::validation(err.to_string()),
        }
    }
}
