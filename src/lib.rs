//! Novelspec - 协作小说创作的一致性后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说项目记录，角色与叙事检查器的归属
//! - Character Context: 角色与关系评分
//! - Narrative Context: 故事结构与叙事一致性检查
//! - World Context: 世界观设定、要素与一致性校验
//! - Rules: 由外部提供的规则谓词
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelRepository, CharacterTracker, NarrativeChecker, WorldValidator）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 各端口的内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
