use crate::modules::reporting::core::rows::ReportRow;
use crate::modules::tracking::core::entry::EntryStatus;
use crate::shared::core::rounding::{minutes_to_hours, round2};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultantDashboard {
    pub registered_hours: f64,
    pub approved_hours: f64,
    pub pending_hours: f64,
    pub rejected_hours: f64,
    /// `approved_minutes / total_minutes * 100`; 0 when nothing is logged.
    pub approval_rate: f64,
    pub entry_count: usize,
}

fn minutes_with_status(rows: &[ReportRow], status: EntryStatus) -> u64 {
    rows.iter()
        .filter(|r| r.status == status)
        .map(|r| u64::from(r.duration_minutes))
        .sum()
}

pub fn build_consultant_dashboard(rows: &[ReportRow]) -> ConsultantDashboard {
    let total_minutes: u64 = rows.iter().map(|r| u64::from(r.duration_minutes)).sum();
    let approved_minutes = minutes_with_status(rows, EntryStatus::Aprobado);
    let pending_minutes = minutes_with_status(rows, EntryStatus::Pendiente);
    let rejected_minutes = minutes_with_status(rows, EntryStatus::Rechazado);

    let approval_rate = if total_minutes == 0 {
        0.0
    } else {
        round2(approved_minutes as f64 / total_minutes as f64 * 100.0)
    };

    ConsultantDashboard {
        registered_hours: round2(minutes_to_hours(total_minutes)),
        approved_hours: round2(minutes_to_hours(approved_minutes)),
        pending_hours: round2(minutes_to_hours(pending_minutes)),
        rejected_hours: round2(minutes_to_hours(rejected_minutes)),
        approval_rate,
        entry_count: rows.len(),
    }
}
