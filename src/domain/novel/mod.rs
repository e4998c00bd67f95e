//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说项目记录（标题、简介、类型、状态、标签）
//! - 为角色与叙事检查器提供归属

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Novel, NovelDraft, NovelPatch};
pub use errors::NovelError;
pub use value_objects::{NovelId, NovelStatus, NovelTitle};
