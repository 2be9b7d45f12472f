use crate::modules::reporting::core::rows::ReportRow;
use crate::modules::tracking::core::catalog::{Project, ProjectStatus};
use crate::modules::tracking::core::entry::EntryStatus;
use crate::shared::core::rounding::{minutes_to_hours, round2};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerDashboard {
    pub active_projects: usize,
    pub pending_count: usize,
    pub approved_hours: f64,
    pub consultant_count: usize,
}

/// Month-scoped KPIs for one manager's portfolio. `projects` is the
/// manager's full project list, `rows` the month's entries for them.
pub fn build_manager_dashboard(projects: &[Project], rows: &[ReportRow]) -> ManagerDashboard {
    let approved_minutes: u64 = rows
        .iter()
        .filter(|r| r.status == EntryStatus::Aprobado)
        .map(|r| u64::from(r.duration_minutes))
        .sum();

    ManagerDashboard {
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Activo)
            .count(),
        pending_count: rows
            .iter()
            .filter(|r| r.status == EntryStatus::Pendiente)
            .count(),
        approved_hours: round2(minutes_to_hours(approved_minutes)),
        consultant_count: rows
            .iter()
            .map(|r| r.user_id.as_str())
            .collect::<HashSet<_>>()
            .len(),
    }
}
