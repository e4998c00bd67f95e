//! Narrative Context - Entities
//!
//! 进入检查器之前在边界处校验过的显式记录，只保留检查器实际读取的字段

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NarrativeError;

/// 情节要素 - 带显式顺序的叙事节点
///
/// 不变量:
/// - id、title 非空
/// - order 非负
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotElement {
    id: String,
    title: String,
    description: String,
    order: i64,
    chapter_id: Option<String>,
}

impl PlotElement {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        order: i64,
        chapter_id: Option<String>,
    ) -> Result<Self, NarrativeError> {
        let id = id.into();
        let title = title.into();
        if id.trim().is_empty() {
            return Err(NarrativeError::InvalidPlotElement(
                "情节要素 id 不能为空".to_string(),
            ));
        }
        if title.trim().is_empty() {
            return Err(NarrativeError::InvalidPlotElement(format!(
                "情节要素 {} 的标题不能为空",
                id
            )));
        }
        if order < 0 {
            return Err(NarrativeError::InvalidPlotElement(format!(
                "情节要素 {} 的顺序不能为负数: {}",
                id, order
            )));
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            order,
            chapter_id: chapter_id.filter(|c| !c.is_empty()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn chapter_id(&self) -> Option<&str> {
        self.chapter_id.as_deref()
    }
}

/// 章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    id: String,
    title: Option<String>,
    /// 本章出场角色名
    characters: Vec<String>,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        title: Option<String>,
        characters: Vec<String>,
    ) -> Result<Self, NarrativeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(NarrativeError::InvalidChapter(
                "章节 id 不能为空".to_string(),
            ));
        }
        Ok(Self {
            id,
            title,
            characters,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn characters(&self) -> &[String] {
        &self.characters
    }
}

/// 故事中登场的角色（只按名称引用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCharacter {
    pub name: String,
}

/// 世界观规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 世界观设定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldBuilding {
    #[serde(default)]
    pub rules: Vec<WorldRule>,
    /// 其余自由格式设定，检查器不读取
    #[serde(default)]
    pub details: Map<String, Value>,
}

/// 时间线事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub date: NaiveDate,
}

impl TimelineEvent {
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_element_shape() {
        assert!(PlotElement::new("p1", "Opening", "", 0, None).is_ok());
        assert!(PlotElement::new("", "Opening", "", 0, None).is_err());
        assert!(PlotElement::new("p1", " ", "", 0, None).is_err());
        assert!(PlotElement::new("p1", "Opening", "", -1, None).is_err());
    }

    #[test]
    fn test_empty_chapter_reference_is_unset() {
        let element = PlotElement::new("p1", "Opening", "", 1, Some(String::new())).unwrap();
        assert_eq!(element.chapter_id(), None);
    }
}
