use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval lifecycle of an entry. Variant order is the display order used by
/// the executive report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pendiente,
    Aprobado,
    Rechazado,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Pendiente => "pendiente",
            EntryStatus::Aprobado => "aprobado",
            EntryStatus::Rechazado => "rechazado",
        }
    }
}

/// A logged interval of work tied to a consultant and a project.
///
/// `duration_minutes` is derived once at registration from `end_time -
/// start_time` and is the single source of truth for every hour total; it is
/// never recomputed during aggregation. Invariant: `duration_minutes > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: u32,
    pub description: String,
    pub status: EntryStatus,
    pub processed_by: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
}

/// Minutes between two times on the same day. `None` when the interval is
/// empty or inverted.
pub fn duration_between(start: NaiveTime, end: NaiveTime) -> Option<u32> {
    let minutes = (end - start).num_minutes();
    if minutes > 0 { Some(minutes as u32) } else { None }
}
