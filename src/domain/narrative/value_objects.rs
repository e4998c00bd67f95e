//! Narrative Context - Value Objects

use serde::{Deserialize, Serialize};

/// 检查器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckerState {
    /// 尚未创建故事结构
    Uninitialized,
    /// 已创建结构
    Structured,
    /// 已执行过情节校验
    Validated,
}

impl Default for CheckerState {
    fn default() -> Self {
        CheckerState::Uninitialized
    }
}
