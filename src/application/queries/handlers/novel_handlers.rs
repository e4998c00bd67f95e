//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NovelRepositoryPort;
use crate::application::queries::{GetNovel, ListNovels};
use crate::domain::novel::Novel;

/// GetNovel Handler
pub struct GetNovelHandler {
    novels: Arc<dyn NovelRepositoryPort>,
}

impl GetNovelHandler {
    pub fn new(novels: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novels }
    }

    pub async fn handle(&self, query: GetNovel) -> Result<Novel, ApplicationError> {
        Ok(self.novels.get(&query.novel_id)?)
    }
}

/// ListNovels Handler
pub struct ListNovelsHandler {
    novels: Arc<dyn NovelRepositoryPort>,
}

impl ListNovelsHandler {
    pub fn new(novels: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novels }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<Vec<Novel>, ApplicationError> {
        Ok(self.novels.list())
    }
}
