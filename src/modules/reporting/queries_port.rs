use crate::modules::reporting::core::rows::{ProjectEntryRow, ReportRow};
use crate::modules::tracking::core::catalog::{Project, WorkFront};
use crate::shared::core::calendar::DateRange;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Filter set for the executive report. `None` id sets mean "all"; the work
/// front filter matches rows by their effective bucket, so `Otro` also
/// captures rows with no work front at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveReportFilter {
    pub client_ids: Option<Vec<String>>,
    pub system_ids: Option<Vec<String>>,
    pub work_front: Option<WorkFront>,
    pub range: DateRange,
}

/// Data-access collaborator consumed by the aggregate builders. Every method
/// returns already-joined, already-filtered rows; the builders never issue
/// queries themselves.
#[async_trait]
pub trait ReportQueries: Send + Sync {
    async fn executive_rows(
        &self,
        filter: &ExecutiveReportFilter,
    ) -> anyhow::Result<Vec<ReportRow>>;

    /// Entries logged against the given manager's projects within the range.
    async fn manager_rows(
        &self,
        manager_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<ReportRow>>;

    async fn projects_by_manager(&self, manager_id: &str) -> anyhow::Result<Vec<Project>>;

    /// Approved entries for one project within the range.
    async fn approved_project_rows(
        &self,
        project_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<ProjectEntryRow>>;

    async fn user_rows(&self, user_id: &str, range: DateRange) -> anyhow::Result<Vec<ReportRow>>;

    async fn rows_in_range(&self, range: DateRange) -> anyhow::Result<Vec<ReportRow>>;

    async fn active_consultant_count(&self) -> anyhow::Result<u64>;
}
