//! Memory Layer - In-Memory State Management
//!
//! 小说、角色、叙事检查器与世界观的内存存储，进程内易失

mod character_tracker;
mod narrative_checker;
mod novel_repository;
mod world_validator;

pub use character_tracker::InMemoryCharacterTracker;
pub use narrative_checker::InMemoryNarrativeChecker;
pub use novel_repository::InMemoryNovelRepository;
pub use world_validator::InMemoryWorldValidator;
