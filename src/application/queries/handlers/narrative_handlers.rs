//! Narrative Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{NarrativeCheckerPort, NovelRepositoryPort, PlotStatus};
use crate::application::queries::{AnalyzeConsistency, GetPlotIssues, GetStructure};
use crate::domain::narrative::{ConsistencyReport, StoryStructure};

/// GetStructure Handler
pub struct GetStructureHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl GetStructureHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(&self, query: GetStructure) -> Result<StoryStructure, ApplicationError> {
        self.novels.ensure_exists(&query.novel_id)?;
        Ok(self.checker.structure(query.novel_id)?)
    }
}

/// AnalyzeConsistency Handler
pub struct AnalyzeConsistencyHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl AnalyzeConsistencyHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(
        &self,
        query: AnalyzeConsistency,
    ) -> Result<ConsistencyReport, ApplicationError> {
        self.novels.ensure_exists(&query.novel_id)?;
        let report = self.checker.analyze_consistency(query.novel_id)?;

        tracing::info!(
            novel_id = %query.novel_id,
            character_issues = report.character_consistency.issues.len(),
            timeline_issues = report.timeline_consistency.issues.len(),
            world_issues = report.world_building_consistency.issues.len(),
            plot_gaps = report.plot_flow.gaps.len(),
            "Consistency analysis completed"
        );

        Ok(report)
    }
}

/// GetPlotIssues Handler
pub struct GetPlotIssuesHandler {
    checker: Arc<dyn NarrativeCheckerPort>,
    novels: Arc<dyn NovelRepositoryPort>,
}

impl GetPlotIssuesHandler {
    pub fn new(
        checker: Arc<dyn NarrativeCheckerPort>,
        novels: Arc<dyn NovelRepositoryPort>,
    ) -> Self {
        Self { checker, novels }
    }

    pub async fn handle(&self, query: GetPlotIssues) -> Result<PlotStatus, ApplicationError> {
        self.novels.ensure_exists(&query.novel_id)?;
        Ok(self.checker.plot_status(query.novel_id))
    }
}
