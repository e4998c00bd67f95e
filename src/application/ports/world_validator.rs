//! World Validator Port - 世界观与要素存储、校验

use crate::domain::world::{
    ElementDraft, ElementPatch, ValidationReport, World, WorldDraft, WorldElement, WorldElementId,
    WorldError, WorldId, WorldPatch,
};

/// World Validator Port
///
/// 世界观拥有其要素，删除世界观时一并删除
pub trait WorldValidatorPort: Send + Sync {
    /// 创建世界观
    fn create_world(&self, draft: WorldDraft) -> Result<World, WorldError>;

    /// 获取世界观
    fn get_world(&self, id: &WorldId) -> Result<World, WorldError>;

    /// 按创建时间列出世界观
    fn list_worlds(&self) -> Vec<World>;

    /// 更新世界观
    fn update_world(&self, id: &WorldId, patch: WorldPatch) -> Result<World, WorldError>;

    /// 删除世界观及其要素，返回删除的要素数
    fn delete_world(&self, id: &WorldId) -> Result<usize, WorldError>;

    /// 创建世界观要素，指定的世界观必须存在
    fn create_element(&self, draft: ElementDraft) -> Result<WorldElement, WorldError>;

    /// 获取要素
    fn get(&self, id: &WorldElementId) -> Result<WorldElement, WorldError>;

    /// 按创建时间列出要素，可按世界观与分类过滤
    fn list(
        &self,
        world_id: Option<&WorldId>,
        category: Option<&str>,
    ) -> Result<Vec<WorldElement>, WorldError>;

    /// 显式更新要素
    fn update(&self, id: &WorldElementId, patch: ElementPatch)
        -> Result<WorldElement, WorldError>;

    /// 删除要素
    fn delete(&self, id: &WorldElementId) -> Result<(), WorldError>;

    /// 校验单个或全部要素，结果覆盖缓存的上一次报告
    fn validate(&self, id: Option<&WorldElementId>) -> Result<ValidationReport, WorldError>;

    /// 最近一次校验报告
    fn last_validation(&self) -> Option<ValidationReport>;
}
