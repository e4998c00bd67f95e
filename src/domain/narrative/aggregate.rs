//! Narrative Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{
    Chapter, CharacterIssue, CheckResult, ConsistencyReport, NarrativeError, PlotElement, PlotFlow,
    PlotGap, PlotIssue, RuleIssue, StoryCharacter, TimelineCheck, TimelineEvent, TimelineIssue,
    WorldBuilding,
};
use crate::domain::rules::ChapterRulePredicate;

/// 未经校验的情节要素
#[derive(Debug, Clone, Deserialize)]
pub struct PlotElementDraft {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub order: i64,
    #[serde(default)]
    pub chapter_id: Option<String>,
}

/// 未经校验的章节
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterDraft {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
}

/// 创建故事结构的原始输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryDraft {
    #[serde(default)]
    pub plot_elements: Vec<PlotElementDraft>,
    #[serde(default)]
    pub chapters: Vec<ChapterDraft>,
    #[serde(default)]
    pub characters: Vec<StoryCharacter>,
    #[serde(default)]
    pub world_building: WorldBuilding,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

/// StoryStructure 聚合根
///
/// 不变量:
/// - 创建后不可修改，只能整体替换
/// - 所有情节要素与章节都已通过形状校验
#[derive(Debug, Clone, Serialize)]
pub struct StoryStructure {
    plot_elements: Vec<PlotElement>,
    chapters: Vec<Chapter>,
    characters: Vec<StoryCharacter>,
    world_building: WorldBuilding,
    timeline: Vec<TimelineEvent>,
    created_at: DateTime<Utc>,
}

impl StoryStructure {
    /// 从原始输入构建，任一情节要素或章节不合法即失败
    pub fn from_draft(draft: StoryDraft) -> Result<Self, NarrativeError> {
        let plot_elements = draft
            .plot_elements
            .into_iter()
            .map(|p| PlotElement::new(p.id, p.title, p.description, p.order, p.chapter_id))
            .collect::<Result<Vec<_>, _>>()?;

        let chapters = draft
            .chapters
            .into_iter()
            .map(|c| Chapter::new(c.id, c.title, c.characters))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            plot_elements,
            chapters,
            characters: draft.characters,
            world_building: draft.world_building,
            timeline: draft.timeline,
            created_at: Utc::now(),
        })
    }

    /// 情节校验：顺序唯一性 + 章节引用
    pub fn plot_issues(&self) -> Vec<PlotIssue> {
        let mut issues = Vec::new();

        let mut order_counts: HashMap<i64, usize> = HashMap::new();
        for element in &self.plot_elements {
            *order_counts.entry(element.order()).or_default() += 1;
        }
        for element in &self.plot_elements {
            if order_counts[&element.order()] > 1 {
                issues.push(PlotIssue::DuplicateOrder {
                    element_id: element.id().to_string(),
                    order: element.order(),
                });
            }
        }

        let chapter_ids: HashSet<&str> = self.chapters.iter().map(|c| c.id()).collect();
        for element in &self.plot_elements {
            if let Some(chapter_id) = element.chapter_id() {
                if !chapter_ids.contains(chapter_id) {
                    issues.push(PlotIssue::UnknownChapter {
                        element_id: element.id().to_string(),
                        chapter_id: chapter_id.to_string(),
                    });
                }
            }
        }

        issues
    }

    /// 章节出场角色必须在角色名单中
    pub fn check_characters(&self) -> CheckResult<CharacterIssue> {
        let known: HashSet<&str> = self.characters.iter().map(|c| c.name.as_str()).collect();

        let mut issues = Vec::new();
        for chapter in &self.chapters {
            for name in chapter.characters() {
                if !known.contains(name.as_str()) {
                    issues.push(CharacterIssue {
                        chapter_id: chapter.id().to_string(),
                        name: name.clone(),
                    });
                }
            }
        }

        CheckResult::from_issues(issues)
    }

    /// 时间线检查
    ///
    /// 按叙事顺序检查相邻事件，日期倒退即为问题，同日不算
    pub fn check_timeline(&self) -> TimelineCheck {
        let issues: Vec<TimelineIssue> = self
            .timeline
            .windows(2)
            .filter(|pair| pair[1].date < pair[0].date)
            .map(|pair| TimelineIssue {
                previous_event: pair[0].id.clone(),
                previous_date: pair[0].date,
                next_event: pair[1].id.clone(),
                next_date: pair[1].date,
            })
            .collect();

        let mut sorted: Vec<&TimelineEvent> = self.timeline.iter().collect();
        sorted.sort_by_key(|e| e.date);

        TimelineCheck {
            status: issues.is_empty(),
            issues,
            chronology: sorted.into_iter().map(|e| e.id.clone()).collect(),
        }
    }

    /// 每个章节对每条世界观规则各调用一次谓词，问题按章节顺序排列
    pub fn check_world_building(
        &self,
        predicate: &dyn ChapterRulePredicate,
    ) -> CheckResult<RuleIssue> {
        let mut issues = Vec::new();
        for chapter in &self.chapters {
            for rule in &self.world_building.rules {
                if let Err(violation) = predicate.check(chapter, rule) {
                    issues.push(RuleIssue {
                        rule: rule.name.clone(),
                        chapter_id: chapter.id().to_string(),
                        detail: violation.detail,
                    });
                }
            }
        }
        CheckResult::from_issues(issues)
    }

    /// 情节流：按顺序排序后，相邻顺序差大于 1 记为空缺
    pub fn plot_flow(&self) -> PlotFlow {
        let mut elements: Vec<&PlotElement> = self.plot_elements.iter().collect();
        elements.sort_by_key(|e| e.order());

        let gaps: Vec<PlotGap> = elements
            .windows(2)
            .filter(|pair| pair[1].order() - pair[0].order() > 1)
            .map(|pair| PlotGap {
                from_element: pair[0].id().to_string(),
                from_order: pair[0].order(),
                to_element: pair[1].id().to_string(),
                to_order: pair[1].order(),
            })
            .collect();

        PlotFlow {
            status: gaps.is_empty(),
            plot_points: elements.len(),
            gaps,
        }
    }

    /// 完整的一致性分析
    pub fn analyze(&self, predicate: &dyn ChapterRulePredicate) -> ConsistencyReport {
        ConsistencyReport {
            character_consistency: self.check_characters(),
            timeline_consistency: self.check_timeline(),
            world_building_consistency: self.check_world_building(predicate),
            plot_flow: self.plot_flow(),
            analyzed_at: Utc::now(),
        }
    }

    // Getters
    pub fn plot_elements(&self) -> &[PlotElement] {
        &self.plot_elements
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn characters(&self) -> &[StoryCharacter] {
        &self.characters
    }

    pub fn world_building(&self) -> &WorldBuilding {
        &self.world_building
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
