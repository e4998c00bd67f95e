//! In-Memory Novel Repository Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::NovelRepositoryPort;
use crate::domain::novel::{Novel, NovelDraft, NovelError, NovelId, NovelPatch};

/// 内存小说存储
pub struct InMemoryNovelRepository {
    novels: DashMap<NovelId, Novel>,
}

impl InMemoryNovelRepository {
    pub fn new() -> Self {
        Self {
            novels: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryNovelRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NovelRepositoryPort for InMemoryNovelRepository {
    fn create(&self, draft: NovelDraft) -> Result<Novel, NovelError> {
        let novel = Novel::new(draft)?;
        self.novels.insert(*novel.id(), novel.clone());
        Ok(novel)
    }

    fn get(&self, id: &NovelId) -> Result<Novel, NovelError> {
        self.novels
            .get(id)
            .map(|n| n.clone())
            .ok_or(NovelError::NotFound(*id))
    }

    fn list(&self) -> Vec<Novel> {
        let mut novels: Vec<Novel> = self.novels.iter().map(|e| e.value().clone()).collect();
        novels.sort_by_key(|n| n.created_at());
        novels
    }

    fn update(&self, id: &NovelId, patch: NovelPatch) -> Result<Novel, NovelError> {
        let mut novel = self.novels.get_mut(id).ok_or(NovelError::NotFound(*id))?;
        novel.apply_patch(patch)?;
        Ok(novel.clone())
    }

    fn delete(&self, id: &NovelId) -> Result<(), NovelError> {
        self.novels
            .remove(id)
            .map(|_| ())
            .ok_or(NovelError::NotFound(*id))
    }

    fn ensure_exists(&self, id: &NovelId) -> Result<(), NovelError> {
        if self.novels.contains_key(id) {
            Ok(())
        } else {
            Err(NovelError::NotFound(*id))
        }
    }
}
