//! World Context - Validation Report
//!
//! 规则是强制性的（失败即冲突，报告无效），关系仅供参考（失败只记警告）

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ElementRelationship, WorldElement};
use crate::domain::rules::{ElementRulePredicate, RelationshipPredicate};

/// 规则冲突
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub element: String,
    pub rule: String,
    pub error: String,
}

/// 关系警告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub element: String,
    pub relationship: ElementRelationship,
    pub warning: String,
}

/// 一致性校验报告
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub conflicts: Vec<Conflict>,
    pub warnings: Vec<Warning>,
    pub validated_at: DateTime<Utc>,
}

/// 校验一组要素
pub fn validate_elements<'a>(
    elements: impl IntoIterator<Item = &'a WorldElement>,
    rules: &dyn ElementRulePredicate,
    relationships: &dyn RelationshipPredicate,
) -> ValidationReport {
    let mut conflicts = Vec::new();
    let mut warnings = Vec::new();

    for element in elements {
        for rule in element.rules() {
            if let Err(violation) = rules.check_rule(element, rule) {
                conflicts.push(Conflict {
                    element: element.name().to_string(),
                    rule: rule.clone(),
                    error: violation.detail,
                });
            }
        }

        for relationship in element.relationships() {
            if let Err(violation) = relationships.check_relationship(element, relationship) {
                warnings.push(Warning {
                    element: element.name().to_string(),
                    relationship: relationship.clone(),
                    warning: violation.detail,
                });
            }
        }
    }

    ValidationReport {
        is_valid: conflicts.is_empty(),
        conflicts,
        warnings,
        validated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::{PermissiveRules, RuleViolation};
    use crate::domain::world::ElementDraft;

    /// 拒绝名为 "broken" 的规则与类型为 "dubious" 的关系
    struct Strict;

    impl ElementRulePredicate for Strict {
        fn check_rule(&self, _element: &WorldElement, rule: &str) -> Result<(), RuleViolation> {
            if rule == "broken" {
                return Err(RuleViolation::new("rule does not hold"));
            }
            Ok(())
        }
    }

    impl RelationshipPredicate for Strict {
        fn check_relationship(
            &self,
            _element: &WorldElement,
            relationship: &ElementRelationship,
        ) -> Result<(), RuleViolation> {
            if relationship.kind == "dubious" {
                return Err(RuleViolation::new("target unknown"));
            }
            Ok(())
        }
    }

    fn element(rules: &[&str], relationship_kinds: &[&str]) -> WorldElement {
        WorldElement::new(ElementDraft {
            name: "Ashfall".to_string(),
            category: "location".to_string(),
            rules: rules.iter().map(|r| r.to_string()).collect(),
            relationships: relationship_kinds
                .iter()
                .map(|k| ElementRelationship {
                    kind: k.to_string(),
                    target_id: None,
                    note: None,
                })
                .collect(),
            ..Default::default()
        })
    }

    #[test]
    fn test_rule_conflict_and_relationship_warning_stay_separate() {
        let e = element(&["broken", "fine"], &["dubious", "located_in"]);
        let report = validate_elements([&e], &Strict, &Strict);

        assert!(!report.is_valid);
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].rule, "broken");
        assert_eq!(report.conflicts[0].element, "Ashfall");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].relationship.kind, "dubious");
    }

    #[test]
    fn test_warnings_alone_keep_report_valid() {
        let e = element(&["fine"], &["dubious"]);
        let report = validate_elements([&e], &Strict, &Strict);

        assert!(report.is_valid);
        assert!(report.conflicts.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_permissive_rules_accept_everything() {
        let e = element(&["broken"], &["dubious"]);
        let report = validate_elements([&e], &PermissiveRules, &PermissiveRules);
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
    }
}
