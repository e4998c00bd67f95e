//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod character_queries;
mod narrative_queries;
mod novel_queries;
mod world_queries;

pub mod handlers;

pub use character_queries::*;
pub use narrative_queries::*;
pub use novel_queries::*;
pub use world_queries::*;
