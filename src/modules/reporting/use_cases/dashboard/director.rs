use crate::modules::reporting::core::rows::{ReportRow, name_or_placeholder};
use crate::modules::tracking::core::catalog::WorkFront;
use crate::modules::tracking::core::entry::EntryStatus;
use crate::shared::core::grouping::{group_by, sort_groups_by};
use crate::shared::core::rounding::{minutes_to_hours, round2};
use serde::Serialize;

/// Monthly capacity assumed per active consultant for the utilization KPI.
pub const MONTHLY_CAPACITY_HOURS: f64 = 160.0;

const TOP_PROJECTS: usize = 10;
const TOP_CONSULTANTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHours {
    pub name: String,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkFrontSlice {
    pub work_front: WorkFront,
    pub entry_count: usize,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorDashboard {
    pub total_hours: f64,
    pub approved_hours: f64,
    pub pending_hours: f64,
    pub rejected_hours: f64,
    pub approval_rate: f64,
    /// `approved_hours / (active_consultants * 160) * 100`; 0 without
    /// active consultants.
    pub utilization: f64,
    pub top_projects: Vec<RankedHours>,
    pub top_consultants: Vec<RankedHours>,
    pub work_front_distribution: Vec<WorkFrontSlice>,
}

fn sum_minutes<'a>(rows: impl Iterator<Item = &'a ReportRow>) -> u64 {
    rows.map(|r| u64::from(r.duration_minutes)).sum()
}

/// Ranks groups by raw minutes descending (name ascending on ties), then
/// converts the top slice to hours.
fn top_by_hours<F>(rows: &[ReportRow], limit: usize, name_fn: F) -> Vec<RankedHours>
where
    F: Fn(&ReportRow) -> String,
{
    let mut totals: Vec<(String, u64)> = group_by(rows.to_vec(), |r| name_fn(r))
        .into_iter()
        .map(|(name, group)| (name, sum_minutes(group.iter())))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
        .into_iter()
        .take(limit)
        .map(|(name, minutes)| RankedHours {
            name,
            total_hours: round2(minutes_to_hours(minutes)),
        })
        .collect()
}

pub fn build_director_dashboard(
    rows: &[ReportRow],
    active_consultant_count: u64,
) -> DirectorDashboard {
    let total_minutes = sum_minutes(rows.iter());
    let approved_minutes = sum_minutes(rows.iter().filter(|r| r.status == EntryStatus::Aprobado));
    let pending_minutes = sum_minutes(rows.iter().filter(|r| r.status == EntryStatus::Pendiente));
    let rejected_minutes = sum_minutes(rows.iter().filter(|r| r.status == EntryStatus::Rechazado));

    let approval_rate = if total_minutes == 0 {
        0.0
    } else {
        round2(approved_minutes as f64 / total_minutes as f64 * 100.0)
    };

    let utilization = if active_consultant_count == 0 {
        0.0
    } else {
        let capacity = active_consultant_count as f64 * MONTHLY_CAPACITY_HOURS;
        round2(minutes_to_hours(approved_minutes) / capacity * 100.0)
    };

    // Rows without a work front count under the explicit `Otro` bucket; no
    // entry is dropped from the distribution.
    let mut front_groups = group_by(rows.to_vec(), |r| r.work_front.unwrap_or(WorkFront::Otro));
    sort_groups_by(&mut front_groups, |a, b| a.cmp(b));
    let work_front_distribution = front_groups
        .into_iter()
        .map(|(front, group)| WorkFrontSlice {
            work_front: front,
            entry_count: group.len(),
            total_hours: round2(minutes_to_hours(sum_minutes(group.iter()))),
        })
        .collect();

    DirectorDashboard {
        total_hours: round2(minutes_to_hours(total_minutes)),
        approved_hours: round2(minutes_to_hours(approved_minutes)),
        pending_hours: round2(minutes_to_hours(pending_minutes)),
        rejected_hours: round2(minutes_to_hours(rejected_minutes)),
        approval_rate,
        utilization,
        top_projects: top_by_hours(rows, TOP_PROJECTS, |r| {
            name_or_placeholder(&r.project_name)
        }),
        top_consultants: top_by_hours(rows, TOP_CONSULTANTS, |r| {
            name_or_placeholder(&r.consultant_name)
        }),
        work_front_distribution,
    }
}
