//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NovelError, NovelId, NovelStatus, NovelTitle};

/// 简介最大长度（字符）
const MAX_DESCRIPTION_CHARS: usize = 2000;

/// 未指定语言时的默认值
const DEFAULT_LANGUAGE: &str = "ja";

/// 创建小说的输入
#[derive(Debug, Clone, Default)]
pub struct NovelDraft {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: NovelStatus,
    pub is_public: bool,
    pub language: Option<String>,
    pub tags: Vec<String>,
}

/// 小说的部分更新，`None` 表示保持不变
#[derive(Debug, Clone, Default)]
pub struct NovelPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<NovelStatus>,
    pub is_public: Option<bool>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Novel 聚合根
///
/// 不变量:
/// - 标题非空且不超过 200 字符
/// - 简介不超过 2000 字符
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Novel {
    id: NovelId,
    title: NovelTitle,
    description: Option<String>,
    genre: Option<String>,
    status: NovelStatus,
    is_public: bool,
    language: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn check_description(description: &str) -> Result<(), NovelError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(NovelError::DescriptionTooLong {
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(())
}

impl Novel {
    /// 创建新小说
    pub fn new(draft: NovelDraft) -> Result<Self, NovelError> {
        let title = NovelTitle::new(draft.title)?;
        if let Some(description) = &draft.description {
            check_description(description)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: NovelId::new(),
            title,
            description: draft.description,
            genre: draft.genre,
            status: draft.status,
            is_public: draft.is_public,
            language: draft
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        })
    }

    /// 应用更新，校验失败时不留下部分修改
    pub fn apply_patch(&mut self, patch: NovelPatch) -> Result<(), NovelError> {
        let title = patch.title.map(NovelTitle::new).transpose()?;
        if let Some(description) = &patch.description {
            check_description(description)?;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(genre) = patch.genre {
            self.genre = Some(genre);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &NovelId {
        &self.id
    }

    pub fn title(&self) -> &NovelTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn status(&self) -> NovelStatus {
        self.status
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NovelDraft {
        NovelDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_novel_defaults() {
        let novel = Novel::new(draft("Ashfall")).unwrap();
        assert_eq!(novel.title().as_str(), "Ashfall");
        assert_eq!(novel.status(), NovelStatus::Draft);
        assert_eq!(novel.language(), "ja");
        assert!(!novel.is_public());
        assert_eq!(novel.created_at(), novel.updated_at());
    }

    #[test]
    fn test_long_description_rejected() {
        let result = Novel::new(NovelDraft {
            description: Some("a".repeat(2001)),
            ..draft("Ashfall")
        });
        assert!(matches!(
            result,
            Err(NovelError::DescriptionTooLong { max: 2000 })
        ));
    }

    #[test]
    fn test_patch_is_atomic() {
        let mut novel = Novel::new(draft("Ashfall")).unwrap();
        let rejected = novel.apply_patch(NovelPatch {
            title: Some(" ".to_string()),
            status: Some(NovelStatus::Completed),
            ..Default::default()
        });
        assert!(rejected.is_err());
        assert_eq!(novel.status(), NovelStatus::Draft);

        novel
            .apply_patch(NovelPatch {
                status: Some(NovelStatus::InProgress),
                tags: Some(vec!["fantasy".to_string()]),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(novel.status(), NovelStatus::InProgress);
        assert_eq!(novel.tags(), ["fantasy".to_string()]);
        assert_eq!(novel.title().as_str(), "Ashfall");
    }
}
