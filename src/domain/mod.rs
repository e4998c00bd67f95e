//! Domain Layer - 领域层
//!
//! 包含四个限界上下文:
//! - Novel Context: 小说项目记录
//! - Character Context: 角色与关系
//! - Narrative Context: 故事结构与一致性分析
//! - World Context: 世界观设定、要素与校验

pub mod character;
pub mod narrative;
pub mod novel;
pub mod world;

// 共享的一致性规则谓词
pub mod rules;

pub use rules::{
    ChapterRulePredicate, ElementRulePredicate, PermissiveRules, RelationshipPredicate,
    RuleViolation,
};
