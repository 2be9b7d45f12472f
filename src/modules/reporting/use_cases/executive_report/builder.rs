use crate::modules::reporting::core::rows::{ReportRow, name_or_placeholder};
use crate::modules::tracking::core::entry::EntryStatus;
use crate::shared::core::calendar::DateRange;
use crate::shared::core::grouping::{group_by, sort_groups_by};
use crate::shared::core::rounding::{minutes_to_hours, round2};
use serde::Serialize;
use std::collections::HashSet;

/// One leaf row of the executive report: a (project, status) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveReportItem {
    pub status: EntryStatus,
    pub total_hours: f64,
    pub unique_consultants: usize,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveProjectGroup {
    pub project_name: String,
    pub manager_name: String,
    pub total_hours: f64,
    pub unique_consultants: usize,
    pub items: Vec<ExecutiveReportItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSystemGroup {
    pub system_name: String,
    pub total_hours: f64,
    pub projects: Vec<ExecutiveProjectGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveClientGroup {
    pub client_name: String,
    pub total_hours: f64,
    pub systems: Vec<ExecutiveSystemGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveReport {
    pub range: DateRange,
    pub clients: Vec<ExecutiveClientGroup>,
    pub grand_total_hours: f64,
    pub entry_count: usize,
}

fn sum_minutes(rows: &[ReportRow]) -> u64 {
    rows.iter().map(|r| u64::from(r.duration_minutes)).sum()
}

fn distinct_consultants(rows: &[ReportRow]) -> usize {
    rows.iter()
        .map(|r| r.user_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Builds the Client -> System -> Project grouping with per-status leaf rows.
/// All statuses are included, tagged per row. Every subtotal and the grand
/// total are converted from a raw minute sum at that level, never from
/// already-rounded children. Empty input yields an empty, renderable model.
pub fn build_executive_report(rows: Vec<ReportRow>, range: DateRange) -> ExecutiveReport {
    let entry_count = rows.len();
    let grand_minutes = sum_minutes(&rows);

    let mut client_groups = group_by(rows, |r| name_or_placeholder(&r.client_name));
    sort_groups_by(&mut client_groups, |a, b| a.cmp(b));

    let clients = client_groups
        .into_iter()
        .map(|(client_name, client_rows)| {
            let client_minutes = sum_minutes(&client_rows);

            let mut system_groups = group_by(client_rows, |r| name_or_placeholder(&r.system_name));
            sort_groups_by(&mut system_groups, |a, b| a.cmp(b));

            let systems = system_groups
                .into_iter()
                .map(|(system_name, system_rows)| {
                    let system_minutes = sum_minutes(&system_rows);

                    let mut project_groups =
                        group_by(system_rows, |r| name_or_placeholder(&r.project_name));
                    sort_groups_by(&mut project_groups, |a, b| a.cmp(b));

                    let projects = project_groups
                        .into_iter()
                        .map(|(project_name, project_rows)| build_project_group(
                            project_name,
                            project_rows,
                        ))
                        .collect();

                    ExecutiveSystemGroup {
                        system_name,
                        total_hours: round2(minutes_to_hours(system_minutes)),
                        projects,
                    }
                })
                .collect();

            ExecutiveClientGroup {
                client_name,
                total_hours: round2(minutes_to_hours(client_minutes)),
                systems,
            }
        })
        .collect();

    ExecutiveReport {
        range,
        clients,
        grand_total_hours: round2(minutes_to_hours(grand_minutes)),
        entry_count,
    }
}

fn build_project_group(project_name: String, rows: Vec<ReportRow>) -> ExecutiveProjectGroup {
    let manager_name = name_or_placeholder(&rows[0].manager_name);
    let total_minutes = sum_minutes(&rows);
    let unique_consultants = distinct_consultants(&rows);

    let mut status_groups = group_by(rows, |r| r.status);
    sort_groups_by(&mut status_groups, |a, b| a.cmp(b));

    let items = status_groups
        .into_iter()
        .map(|(status, status_rows)| ExecutiveReportItem {
            status,
            total_hours: round2(minutes_to_hours(sum_minutes(&status_rows))),
            unique_consultants: distinct_consultants(&status_rows),
            entry_count: status_rows.len(),
        })
        .collect();

    ExecutiveProjectGroup {
        project_name,
        manager_name,
        total_hours: round2(minutes_to_hours(total_minutes)),
        unique_consultants,
        items,
    }
}
