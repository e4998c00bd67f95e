//! In-Memory Narrative Checker Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{NarrativeCheckerPort, PlotStatus, PlotValidation};
use crate::domain::narrative::{
    ConsistencyReport, NarrativeChecker, NarrativeError, StoryDraft, StoryStructure,
};
use crate::domain::novel::NovelId;
use crate::domain::rules::ChapterRulePredicate;

/// 内存叙事检查器，每部小说一个状态机
pub struct InMemoryNarrativeChecker {
    checkers: DashMap<NovelId, NarrativeChecker>,
    rules: Arc<dyn ChapterRulePredicate>,
}

impl InMemoryNarrativeChecker {
    pub fn new(rules: Arc<dyn ChapterRulePredicate>) -> Self {
        Self {
            checkers: DashMap::new(),
            rules,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl NarrativeCheckerPort for InMemoryNarrativeChecker {
    fn create_structure(
        &self,
        novel_id: NovelId,
        draft: StoryDraft,
    ) -> Result<StoryStructure, NarrativeError> {
        let structure = match self.checkers.get_mut(&novel_id) {
            Some(mut checker) => checker.create_structure(draft)?.clone(),
            None => {
                // 只有成功时才登记新检查器
                let mut checker = NarrativeChecker::new();
                let structure = checker.create_structure(draft)?.clone();
                self.checkers.insert(novel_id, checker);
                structure
            }
        };
        Ok(structure)
    }

    fn validate_plot(&self, novel_id: NovelId) -> Result<PlotValidation, NarrativeError> {
        let mut checker = self
            .checkers
            .get_mut(&novel_id)
            .ok_or(NarrativeError::NotStructured)?;
        let valid = checker.validate_plot()?;
        Ok(PlotValidation {
            valid,
            issues: checker.plot_issues().to_vec(),
        })
    }

    fn analyze_consistency(&self, novel_id: NovelId) -> Result<ConsistencyReport, NarrativeError> {
        let checker = self
            .checkers
            .get(&novel_id)
            .ok_or(NarrativeError::NotStructured)?;
        checker.analyze_consistency(self.rules.as_ref())
    }

    fn structure(&self, novel_id: NovelId) -> Result<StoryStructure, NarrativeError> {
        self.checkers
            .get(&novel_id)
            .and_then(|checker| checker.structure().cloned())
            .ok_or(NarrativeError::NotStructured)
    }

    fn plot_status(&self, novel_id: NovelId) -> PlotStatus {
        self.checkers
            .get(&novel_id)
            .map(|checker| PlotStatus {
                state: checker.state(),
                issues: checker.plot_issues().to_vec(),
            })
            .unwrap_or_default()
    }

    fn discard(&self, novel_id: NovelId) -> bool {
        self.checkers.remove(&novel_id).is_some()
    }
}
