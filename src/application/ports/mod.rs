//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod character_tracker;
mod narrative_checker;
mod novel_repository;
mod world_validator;

pub use character_tracker::{CharacterTrackerPort, RelationshipAnalysis};
pub use narrative_checker::{NarrativeCheckerPort, PlotStatus, PlotValidation};
pub use novel_repository::NovelRepositoryPort;
pub use world_validator::WorldValidatorPort;
