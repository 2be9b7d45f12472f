use crate::modules::tracking::core::catalog::WorkFront;
use crate::modules::tracking::core::entry::EntryStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a join produced no display name.
pub const MISSING_NAME: &str = "-";

/// A time entry joined with the denormalized metadata the reports display.
/// Absent joins stay `None` here; the builders substitute [`MISSING_NAME`] so
/// no row is ever dropped for missing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub status: EntryStatus,
    pub project_name: Option<String>,
    pub client_name: Option<String>,
    pub system_name: Option<String>,
    pub manager_name: Option<String>,
    pub consultant_name: Option<String>,
    pub work_front: Option<WorkFront>,
}

/// An approved entry joined with the consultant's display name, as consumed
/// by the project report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntryRow {
    pub entry_id: String,
    pub user_id: String,
    pub consultant_name: Option<String>,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub description: String,
}

pub fn name_or_placeholder(name: &Option<String>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.clone(),
        _ => MISSING_NAME.to_string(),
    }
}
