//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义
//!   （NovelRepository、CharacterTracker、NarrativeChecker、WorldValidator）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{
        CreateCharacterHandler, CreateNovelHandler, CreateStructureHandler,
        CreateWorldElementHandler, CreateWorldHandler, DeleteCharacterHandler, DeleteNovelHandler,
        DeleteWorldElementHandler, DeleteWorldHandler, DiscardStructureHandler,
        UpdateCharacterHandler, UpdateNovelHandler, UpdateRelationshipHandler,
        UpdateWorldElementHandler, UpdateWorldHandler, ValidatePlotHandler, ValidateWorldHandler,
    },
    CreateCharacter,
    CreateNovel,
    CreateStructure,
    CreateWorld,
    CreateWorldElement,
    DeleteCharacter,
    DeleteNovel,
    DeleteWorld,
    DeleteWorldElement,
    DiscardStructure,
    UpdateCharacter,
    UpdateNovel,
    UpdateRelationship,
    UpdateWorld,
    UpdateWorldElement,
    ValidatePlot,
    ValidateWorld,
};

pub use error::ApplicationError;

pub use ports::{
    CharacterTrackerPort, NarrativeCheckerPort, NovelRepositoryPort, PlotStatus, PlotValidation,
    RelationshipAnalysis, WorldValidatorPort,
};

pub use queries::{
    handlers::{
        AnalyzeConsistencyHandler, AnalyzeRelationshipsHandler, GetCharacterHandler,
        GetLastValidationHandler, GetNovelHandler, GetPlotIssuesHandler, GetStructureHandler,
        GetWorldElementHandler, GetWorldHandler, ListCharactersHandler, ListNovelsHandler,
        ListRelationshipTypesHandler, ListWorldElementsHandler, ListWorldsHandler,
        RelationshipTypeInfo,
    },
    AnalyzeConsistency,
    AnalyzeRelationships,
    GetCharacter,
    GetLastValidation,
    GetNovel,
    GetPlotIssues,
    GetStructure,
    GetWorld,
    GetWorldElement,
    ListCharacters,
    ListNovels,
    ListRelationshipTypes,
    ListWorldElements,
    ListWorlds,
};
