//! Novel Repository Port - 小说记录存储

use crate::domain::novel::{Novel, NovelDraft, NovelError, NovelId, NovelPatch};

/// Novel Repository Port
pub trait NovelRepositoryPort: Send + Sync {
    /// 创建并保存新小说
    fn create(&self, draft: NovelDraft) -> Result<Novel, NovelError>;

    /// 获取小说
    fn get(&self, id: &NovelId) -> Result<Novel, NovelError>;

    /// 按创建时间列出所有小说
    fn list(&self) -> Vec<Novel>;

    /// 更新小说
    fn update(&self, id: &NovelId, patch: NovelPatch) -> Result<Novel, NovelError>;

    /// 删除小说
    fn delete(&self, id: &NovelId) -> Result<(), NovelError>;

    /// 小说不存在时返回 NotFound
    fn ensure_exists(&self, id: &NovelId) -> Result<(), NovelError>;
}
