use crate::modules::reporting::core::rows::{ProjectEntryRow, ReportRow};
use crate::modules::tracking::core::catalog::WorkFront;
use crate::modules::tracking::core::entry::{EntryStatus, TimeEntry};
use crate::modules::tracking::use_cases::register_entry::command::RegisterEntry;
use crate::shared::core::calendar::DateRange;
use chrono::{Duration, NaiveDate, NaiveTime};

pub fn january() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    )
}

pub struct ReportRowBuilder {
    row: ReportRow,
}

impl ReportRowBuilder {
    pub fn new() -> Self {
        Self {
            row: ReportRow {
                entry_id: "te-fixed-0001".to_string(),
                user_id: "u-fixed-0001".to_string(),
                project_id: "p-0001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                duration_minutes: 60,
                status: EntryStatus::Pendiente,
                project_name: Some("Proyecto Fijo".to_string()),
                client_name: Some("Cliente Fijo".to_string()),
                system_name: Some("Sistema Fijo".to_string()),
                manager_name: Some("Gerente Fijo".to_string()),
                consultant_name: Some("Consultor Fijo".to_string()),
                work_front: None,
            },
        }
    }

    pub fn entry_id(mut self, value: impl Into<String>) -> Self {
        self.row.entry_id = value.into();
        self
    }

    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.row.user_id = value.into();
        self
    }

    pub fn project_id(mut self, value: impl Into<String>) -> Self {
        self.row.project_id = value.into();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.row.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn minutes(mut self, value: u32) -> Self {
        self.row.duration_minutes = value;
        self
    }

    pub fn status(mut self, value: EntryStatus) -> Self {
        self.row.status = value;
        self
    }

    pub fn project_name(mut self, value: impl Into<String>) -> Self {
        self.row.project_name = Some(value.into());
        self
    }

    pub fn client_name(mut self, value: impl Into<String>) -> Self {
        self.row.client_name = Some(value.into());
        self
    }

    pub fn system_name(mut self, value: impl Into<String>) -> Self {
        self.row.system_name = Some(value.into());
        self
    }

    pub fn manager_name(mut self, value: impl Into<String>) -> Self {
        self.row.manager_name = Some(value.into());
        self
    }

    pub fn consultant_name(mut self, value: impl Into<String>) -> Self {
        self.row.consultant_name = Some(value.into());
        self
    }

    pub fn work_front(mut self, value: WorkFront) -> Self {
        self.row.work_front = Some(value);
        self
    }

    pub fn no_client_name(mut self) -> Self {
        self.row.client_name = None;
        self
    }

    pub fn no_system_name(mut self) -> Self {
        self.row.system_name = None;
        self
    }

    pub fn no_manager_name(mut self) -> Self {
        self.row.manager_name = None;
        self
    }

    pub fn no_work_front(mut self) -> Self {
        self.row.work_front = None;
        self
    }

    pub fn build(self) -> ReportRow {
        self.row
    }
}

pub struct ProjectEntryRowBuilder {
    row: ProjectEntryRow,
}

impl ProjectEntryRowBuilder {
    pub fn new() -> Self {
        Self {
            row: ProjectEntryRow {
                entry_id: "te-fixed-0001".to_string(),
                user_id: "u-fixed-0001".to_string(),
                consultant_name: Some("Consultor Fijo".to_string()),
                date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                duration_minutes: 60,
                description: "Trabajo registrado".to_string(),
            },
        }
    }

    pub fn entry_id(mut self, value: impl Into<String>) -> Self {
        self.row.entry_id = value.into();
        self
    }

    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.row.user_id = value.into();
        self
    }

    pub fn consultant_name(mut self, value: impl Into<String>) -> Self {
        self.row.consultant_name = Some(value.into());
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.row.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn minutes(mut self, value: u32) -> Self {
        self.row.duration_minutes = value;
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.row.description = value.into();
        self
    }

    pub fn build(self) -> ProjectEntryRow {
        self.row
    }
}

pub fn make_entry(
    id: &str,
    user_id: &str,
    project_id: &str,
    year: i32,
    month: u32,
    day: u32,
    minutes: u32,
) -> TimeEntry {
    let start_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    TimeEntry {
        id: id.to_string(),
        user_id: user_id.to_string(),
        project_id: project_id.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        start_time,
        end_time: start_time + Duration::minutes(i64::from(minutes)),
        duration_minutes: minutes,
        description: "Trabajo registrado".to_string(),
        status: EntryStatus::Pendiente,
        processed_by: None,
        processed_at: None,
    }
}

pub fn register_command(
    entry_id: &str,
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
) -> RegisterEntry {
    RegisterEntry {
        entry_id: entry_id.to_string(),
        user_id: "u-fixed-0001".to_string(),
        project_id: "p-0001".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        start_time: NaiveTime::from_hms_opt(start_hour, start_minute, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end_hour, end_minute, 0).unwrap(),
        description: "Trabajo registrado".to_string(),
    }
}
