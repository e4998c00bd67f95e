//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod character_handlers;
mod narrative_handlers;
mod novel_handlers;
mod world_handlers;

pub use character_handlers::*;
pub use narrative_handlers::*;
pub use novel_handlers::*;
pub use world_handlers::*;
