//! Narrative Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("故事结构尚未创建")]
    NotStructured,

    #[error("无效的情节要素: {0}")]
    InvalidPlotElement(String),

    #[error("无效的章节: {0}")]
    InvalidChapter(String),
}
