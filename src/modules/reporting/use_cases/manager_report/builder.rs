use crate::modules::reporting::core::rows::ReportRow;
use crate::modules::tracking::core::catalog::{Project, ProjectStatus, Role, UserProfile};
use crate::modules::tracking::core::entry::EntryStatus;
use crate::shared::core::grouping::group_by;
use crate::shared::core::rounding::{minutes_to_hours, round2};
use serde::Serialize;
use std::collections::HashSet;

/// Per-project line of the manager report. Projects with no entries in the
/// month still appear, with zeroed stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerProjectStat {
    pub project_id: String,
    pub project_name: String,
    pub status: ProjectStatus,
    pub approved_hours: f64,
    pub pending_count: usize,
    pub consultant_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerKpis {
    pub active_projects: usize,
    pub total_approved_hours: f64,
    /// Defined as 0 when the manager has no active projects.
    pub avg_hours_per_project: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerReport {
    pub manager_id: String,
    pub year: i32,
    pub month: u32,
    pub projects: Vec<ManagerProjectStat>,
    pub kpis: ManagerKpis,
}

/// Outcome of the manager-selector rule: a `gerente` is pinned to their own
/// report with the selector disabled; other roles default to themselves when
/// they appear in the list, else to the first manager alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerSelection {
    pub selected_manager_id: Option<String>,
    pub selector_enabled: bool,
}

pub fn resolve_manager_selection(
    viewer: &UserProfile,
    managers: &[UserProfile],
) -> ManagerSelection {
    if viewer.role == Role::Gerente {
        return ManagerSelection {
            selected_manager_id: Some(viewer.id.clone()),
            selector_enabled: false,
        };
    }
    if managers.iter().any(|m| m.id == viewer.id) {
        return ManagerSelection {
            selected_manager_id: Some(viewer.id.clone()),
            selector_enabled: true,
        };
    }
    let first = managers
        .iter()
        .min_by(|a, b| a.display_name().cmp(&b.display_name()))
        .map(|m| m.id.clone());
    ManagerSelection {
        selected_manager_id: first,
        selector_enabled: true,
    }
}

/// Folds one calendar month of entry rows into the manager's project stats
/// and KPIs. `projects` is the manager's full project list; `rows` the
/// already-filtered entries for those projects in the month.
pub fn build_manager_report(
    manager_id: &str,
    year: i32,
    month: u32,
    mut projects: Vec<Project>,
    rows: Vec<ReportRow>,
) -> ManagerReport {
    projects.sort_by(|a, b| a.nombre.cmp(&b.nombre));

    let mut by_project = group_by(rows, |r| r.project_id.clone());

    let mut total_approved_minutes: u64 = 0;
    let stats: Vec<ManagerProjectStat> = projects
        .iter()
        .map(|project| {
            let project_rows = by_project
                .iter_mut()
                .find(|(id, _)| *id == project.id)
                .map(|(_, rows)| std::mem::take(rows))
                .unwrap_or_default();

            let approved_minutes: u64 = project_rows
                .iter()
                .filter(|r| r.status == EntryStatus::Aprobado)
                .map(|r| u64::from(r.duration_minutes))
                .sum();
            total_approved_minutes += approved_minutes;

            let pending_count = project_rows
                .iter()
                .filter(|r| r.status == EntryStatus::Pendiente)
                .count();

            let consultant_count = project_rows
                .iter()
                .map(|r| r.user_id.as_str())
                .collect::<HashSet<_>>()
                .len();

            ManagerProjectStat {
                project_id: project.id.clone(),
                project_name: project.nombre.clone(),
                status: project.status,
                approved_hours: round2(minutes_to_hours(approved_minutes)),
                pending_count,
                consultant_count,
            }
        })
        .collect();

    let active_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Activo)
        .count();

    let total_approved_hours_raw = minutes_to_hours(total_approved_minutes);
    let avg_hours_per_project = if active_projects == 0 {
        0.0
    } else {
        round2(total_approved_hours_raw / active_projects as f64)
    };

    ManagerReport {
        manager_id: manager_id.to_string(),
        year,
        month,
        projects: stats,
        kpis: ManagerKpis {
            active_projects,
            total_approved_hours: round2(total_approved_hours_raw),
            avg_hours_per_project,
        },
    }
}
