//! Novel Context - Errors

use thiserror::Error;

use super::NovelId;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("小说不存在: {0}")]
    NotFound(NovelId),

    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("简介长度不能超过{max}字符")]
    DescriptionTooLong { max: usize },

    #[error("未知的小说状态: {0}")]
    InvalidStatus(String),
}
