use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::reporting::export::csv::CSV_CONTENT_TYPE;
use crate::modules::reporting::queries_port::ExecutiveReportFilter;
use crate::modules::reporting::use_cases::executive_report::builder::build_executive_report;
use crate::modules::reporting::use_cases::executive_report::export::{
    executive_report_filename, export_executive_report,
};
use crate::modules::tracking::core::catalog::WorkFront;
use crate::shared::core::calendar::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExecutiveReportParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Comma-separated id sets; absent means "all".
    pub client_ids: Option<String>,
    pub system_ids: Option<String>,
    pub work_front: Option<String>,
}

fn split_ids(raw: &Option<String>) -> Option<Vec<String>> {
    raw.as_ref().map(|value| {
        value
            .split(',')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    })
}

fn parse_work_front(raw: &str) -> Option<WorkFront> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

fn filter_from(params: &ExecutiveReportParams) -> Result<ExecutiveReportFilter, StatusCode> {
    let work_front = match &params.work_front {
        Some(raw) => Some(parse_work_front(raw).ok_or(StatusCode::UNPROCESSABLE_ENTITY)?),
        None => None,
    };
    Ok(ExecutiveReportFilter {
        client_ids: split_ids(&params.client_ids),
        system_ids: split_ids(&params.system_ids),
        work_front,
        range: DateRange::new(params.start_date, params.end_date),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExecutiveReportParams>,
) -> impl IntoResponse {
    let filter = match filter_from(&params) {
        Ok(filter) => filter,
        Err(status) => return status.into_response(),
    };
    match state.reports.executive_rows(&filter).await {
        Ok(rows) => Json(build_executive_report(rows, filter.range)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// CSV download. An empty report answers 204 instead of producing an empty
/// file.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExecutiveReportParams>,
) -> impl IntoResponse {
    let filter = match filter_from(&params) {
        Ok(filter) => filter,
        Err(status) => return status.into_response(),
    };
    let rows = match state.reports.executive_rows(&filter).await {
        Ok(rows) => rows,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let report = build_executive_report(rows, filter.range);
    if report.entry_count == 0 {
        return StatusCode::NO_CONTENT.into_response();
    }
    let document = export_executive_report(&report);
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", executive_report_filename(&report)),
            ),
        ],
        document.render(),
    )
        .into_response()
}
