//! Consistency Rule Predicates
//!
//! 世界观规则与要素关系的校验能力由外部提供，核心只负责：
//! - 对每个 (对象, 规则) 组合调用一次谓词
//! - 把失败结果归类为冲突（规则）或警告（关系）

use serde::Serialize;

use crate::domain::narrative::{Chapter, WorldRule};
use crate::domain::world::{ElementRelationship, WorldElement};

/// 谓词返回的违规详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub detail: String,
}

impl RuleViolation {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail)
    }
}

/// 章节是否遵守世界观规则
pub trait ChapterRulePredicate: Send + Sync {
    fn check(&self, chapter: &Chapter, rule: &WorldRule) -> Result<(), RuleViolation>;
}

/// 世界观要素是否遵守某条具名规则（失败即冲突）
pub trait ElementRulePredicate: Send + Sync {
    fn check_rule(&self, element: &WorldElement, rule: &str) -> Result<(), RuleViolation>;
}

/// 世界观要素的某条关系是否成立（失败仅为警告）
pub trait RelationshipPredicate: Send + Sync {
    fn check_relationship(
        &self,
        element: &WorldElement,
        relationship: &ElementRelationship,
    ) -> Result<(), RuleViolation>;
}

/// 默认谓词：不附加任何规则语义，一律通过
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveRules;

impl ChapterRulePredicate for PermissiveRules {
    fn check(&self, _chapter: &Chapter, _rule: &WorldRule) -> Result<(), RuleViolation> {
        Ok(())
    }
}

impl ElementRulePredicate for PermissiveRules {
    fn check_rule(&self, _element: &WorldElement, _rule: &str) -> Result<(), RuleViolation> {
        Ok(())
    }
}

impl RelationshipPredicate for PermissiveRules {
    fn check_relationship(
        &self,
        _element: &WorldElement,
        _relationship: &ElementRelationship,
    ) -> Result<(), RuleViolation> {
        Ok(())
    }
}
