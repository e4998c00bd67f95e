//! World Context - 世界观限界上下文
//!
//! 职责:
//! - 世界观设定（时代、地理、文化等）
//! - 世界观要素管理，要素可归属于某个世界观
//! - 规则与关系的一致性校验

mod aggregate;
mod container;
mod errors;
mod report;
mod value_objects;

pub use aggregate::{ElementDraft, ElementPatch, WorldElement};
pub use container::{World, WorldDraft, WorldPatch};
pub use errors::WorldError;
pub use report::{validate_elements, Conflict, ValidationReport, Warning};
pub use value_objects::{ElementRelationship, WorldElementId, WorldId};
