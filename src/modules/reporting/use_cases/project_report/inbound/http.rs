use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::reporting::export::csv::CSV_CONTENT_TYPE;
use crate::modules::reporting::use_cases::project_report::builder::build_project_report;
use crate::modules::reporting::use_cases::project_report::export::{
    export_project_report, project_report_filename,
};
use crate::shared::core::calendar::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProjectReportParams {
    pub project_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProjectReportParams>,
) -> impl IntoResponse {
    let range = DateRange::new(params.start_date, params.end_date);
    match state
        .reports
        .approved_project_rows(&params.project_id, range)
        .await
    {
        Ok(rows) => Json(build_project_report(&params.project_id, rows, range)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ProjectReportParams>,
) -> impl IntoResponse {
    let range = DateRange::new(params.start_date, params.end_date);
    let rows = match state
        .reports
        .approved_project_rows(&params.project_id, range)
        .await
    {
        Ok(rows) => rows,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let report = build_project_report(&params.project_id, rows, range);
    if report.consultants.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    let document = export_project_report(&report);
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", project_report_filename(&report)),
            ),
        ],
        document.render(),
    )
        .into_response()
}
