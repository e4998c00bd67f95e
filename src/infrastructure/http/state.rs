//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    AnalyzeConsistencyHandler, AnalyzeRelationshipsHandler, CharacterTrackerPort,
    CreateCharacterHandler, CreateNovelHandler, CreateStructureHandler, CreateWorldElementHandler,
    CreateWorldHandler, DeleteCharacterHandler, DeleteNovelHandler, DeleteWorldElementHandler,
    DeleteWorldHandler, DiscardStructureHandler, GetCharacterHandler, GetLastValidationHandler,
    GetNovelHandler, GetPlotIssuesHandler, GetStructureHandler, GetWorldElementHandler,
    GetWorldHandler, ListCharactersHandler, ListNovelsHandler, ListRelationshipTypesHandler,
    ListWorldElementsHandler, ListWorldsHandler, NarrativeCheckerPort, NovelRepositoryPort,
    UpdateCharacterHandler, UpdateNovelHandler, UpdateRelationshipHandler,
    UpdateWorldElementHandler, UpdateWorldHandler, ValidatePlotHandler, ValidateWorldHandler,
    WorldValidatorPort,
};

/// 应用状态
///
/// 小说记录为角色与叙事检查器提供归属，世界观校验器独立于其余组件
pub struct AppState {
    // ========== Ports ==========
    pub novels: Arc<dyn NovelRepositoryPort>,
    pub character_tracker: Arc<dyn CharacterTrackerPort>,
    pub narrative_checker: Arc<dyn NarrativeCheckerPort>,
    pub world_validator: Arc<dyn WorldValidatorPort>,

    // ========== Command Handlers ==========
    pub create_novel_handler: CreateNovelHandler,
    pub update_novel_handler: UpdateNovelHandler,
    pub delete_novel_handler: DeleteNovelHandler,
    pub create_character_handler: CreateCharacterHandler,
    pub update_character_handler: UpdateCharacterHandler,
    pub delete_character_handler: DeleteCharacterHandler,
    pub update_relationship_handler: UpdateRelationshipHandler,
    pub create_structure_handler: CreateStructureHandler,
    pub validate_plot_handler: ValidatePlotHandler,
    pub discard_structure_handler: DiscardStructureHandler,
    pub create_world_handler: CreateWorldHandler,
    pub update_world_handler: UpdateWorldHandler,
    pub delete_world_handler: DeleteWorldHandler,
    pub create_world_element_handler: CreateWorldElementHandler,
    pub update_world_element_handler: UpdateWorldElementHandler,
    pub delete_world_element_handler: DeleteWorldElementHandler,
    pub validate_world_handler: ValidateWorldHandler,

    // ========== Query Handlers ==========
    pub get_novel_handler: GetNovelHandler,
    pub list_novels_handler: ListNovelsHandler,
    pub get_character_handler: GetCharacterHandler,
    pub list_characters_handler: ListCharactersHandler,
    pub analyze_relationships_handler: AnalyzeRelationshipsHandler,
    pub list_relationship_types_handler: ListRelationshipTypesHandler,
    pub get_structure_handler: GetStructureHandler,
    pub analyze_consistency_handler: AnalyzeConsistencyHandler,
    pub get_plot_issues_handler: GetPlotIssuesHandler,
    pub get_world_handler: GetWorldHandler,
    pub list_worlds_handler: ListWorldsHandler,
    pub get_world_element_handler: GetWorldElementHandler,
    pub list_world_elements_handler: ListWorldElementsHandler,
    pub get_last_validation_handler: GetLastValidationHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        novels: Arc<dyn NovelRepositoryPort>,
        character_tracker: Arc<dyn CharacterTrackerPort>,
        narrative_checker: Arc<dyn NarrativeCheckerPort>,
        world_validator: Arc<dyn WorldValidatorPort>,
    ) -> Self {
        Self {
            // Ports
            novels: novels.clone(),
            character_tracker: character_tracker.clone(),
            narrative_checker: narrative_checker.clone(),
            world_validator: world_validator.clone(),

            // Command handlers
            create_novel_handler: CreateNovelHandler::new(novels.clone()),
            update_novel_handler: UpdateNovelHandler::new(novels.clone()),
            delete_novel_handler: DeleteNovelHandler::new(
                novels.clone(),
                narrative_checker.clone(),
                character_tracker.clone(),
            ),
            create_character_handler: CreateCharacterHandler::new(
                character_tracker.clone(),
                novels.clone(),
            ),
            update_character_handler: UpdateCharacterHandler::new(character_tracker.clone()),
            delete_character_handler: DeleteCharacterHandler::new(character_tracker.clone()),
            update_relationship_handler: UpdateRelationshipHandler::new(character_tracker.clone()),
            create_structure_handler: CreateStructureHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            validate_plot_handler: ValidatePlotHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            discard_structure_handler: DiscardStructureHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            create_world_handler: CreateWorldHandler::new(world_validator.clone()),
            update_world_handler: UpdateWorldHandler::new(world_validator.clone()),
            delete_world_handler: DeleteWorldHandler::new(world_validator.clone()),
            create_world_element_handler: CreateWorldElementHandler::new(world_validator.clone()),
            update_world_element_handler: UpdateWorldElementHandler::new(world_validator.clone()),
            delete_world_element_handler: DeleteWorldElementHandler::new(world_validator.clone()),
            validate_world_handler: ValidateWorldHandler::new(world_validator.clone()),

            // Query handlers
            get_novel_handler: GetNovelHandler::new(novels.clone()),
            list_novels_handler: ListNovelsHandler::new(novels.clone()),
            get_character_handler: GetCharacterHandler::new(character_tracker.clone()),
            list_characters_handler: ListCharactersHandler::new(
                character_tracker.clone(),
                novels.clone(),
            ),
            analyze_relationships_handler: AnalyzeRelationshipsHandler::new(
                character_tracker.clone(),
            ),
            list_relationship_types_handler: ListRelationshipTypesHandler::new(),
            get_structure_handler: GetStructureHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            analyze_consistency_handler: AnalyzeConsistencyHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            get_plot_issues_handler: GetPlotIssuesHandler::new(
                narrative_checker.clone(),
                novels.clone(),
            ),
            get_world_handler: GetWorldHandler::new(world_validator.clone()),
            list_worlds_handler: ListWorldsHandler::new(world_validator.clone()),
            get_world_element_handler: GetWorldElementHandler::new(world_validator.clone()),
            list_world_elements_handler: ListWorldElementsHandler::new(world_validator.clone()),
            get_last_validation_handler: GetLastValidationHandler::new(world_validator),
        }
    }
}
