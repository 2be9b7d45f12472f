use crate::modules::reporting::core::rows::{ProjectEntryRow, name_or_placeholder};
use crate::shared::core::calendar::{DateRange, iso_week};
use crate::shared::core::grouping::{group_by, sort_groups_by};
use crate::shared::core::rounding::{minutes_to_hours, round2};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReportEntry {
    pub entry_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultantGroup {
    pub user_id: String,
    pub consultant_name: String,
    pub entries: Vec<ProjectReportEntry>,
    pub subtotal_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotal {
    pub iso_week: u32,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub project_id: String,
    pub range: DateRange,
    pub consultants: Vec<ConsultantGroup>,
    pub weekly_totals: Vec<WeekTotal>,
    pub grand_total_hours: f64,
}

fn sum_minutes(rows: &[ProjectEntryRow]) -> u64 {
    rows.iter().map(|r| u64::from(r.duration_minutes)).sum()
}

/// Builds the per-consultant breakdown of one project's approved entries.
/// Groups sort alphabetically by consultant name, entries by date ascending;
/// subtotals, weekly totals and the grand total each convert their own raw
/// minute sum.
pub fn build_project_report(
    project_id: &str,
    rows: Vec<ProjectEntryRow>,
    range: DateRange,
) -> ProjectReport {
    let grand_minutes = sum_minutes(&rows);

    let mut week_groups = group_by(rows.clone(), |r| iso_week(r.date));
    sort_groups_by(&mut week_groups, |a, b| a.cmp(b));
    let weekly_totals = week_groups
        .into_iter()
        .map(|(week, week_rows)| WeekTotal {
            iso_week: week,
            total_hours: round2(minutes_to_hours(sum_minutes(&week_rows))),
        })
        .collect();

    let mut consultant_groups = group_by(rows, |r| r.user_id.clone());
    let mut consultants: Vec<ConsultantGroup> = consultant_groups
        .iter_mut()
        .map(|(user_id, group_rows)| {
            let subtotal_minutes = sum_minutes(group_rows);
            group_rows.sort_by(|a, b| a.date.cmp(&b.date));
            ConsultantGroup {
                user_id: user_id.clone(),
                consultant_name: name_or_placeholder(&group_rows[0].consultant_name),
                entries: group_rows
                    .iter()
                    .map(|r| ProjectReportEntry {
                        entry_id: r.entry_id.clone(),
                        date: r.date,
                        hours: round2(minutes_to_hours(u64::from(r.duration_minutes))),
                        description: r.description.clone(),
                    })
                    .collect(),
                subtotal_hours: round2(minutes_to_hours(subtotal_minutes)),
            }
        })
        .collect();
    consultants.sort_by(|a, b| a.consultant_name.cmp(&b.consultant_name));

    ProjectReport {
        project_id: project_id.to_string(),
        range,
        consultants,
        weekly_totals,
        grand_total_hours: round2(minutes_to_hours(grand_minutes)),
    }
}
