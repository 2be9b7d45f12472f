use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reporting::export::csv::CSV_CONTENT_TYPE;
use crate::modules::reporting::use_cases::manager_report::builder::{
    ManagerReport, ManagerSelection, build_manager_report, resolve_manager_selection,
};
use crate::modules::reporting::use_cases::manager_report::export::{
    export_manager_report, manager_report_filename,
};
use crate::modules::tracking::core::catalog::Role;
use crate::shared::core::calendar::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ManagerReportParams {
    pub manager_id: Option<String>,
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct ManagerReportResponse {
    pub selection: ManagerSelection,
    pub report: Option<ManagerReport>,
}

fn caller_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

enum Resolved {
    Report(ManagerReportResponse),
    Status(StatusCode),
}

/// Applies the selector rule: a `gerente` viewer is pinned to their own
/// report regardless of the requested id; other roles may pick any manager.
async fn resolve(state: &AppState, headers: &HeaderMap, params: &ManagerReportParams) -> Resolved {
    let Some(viewer_id) = caller_id(headers) else {
        return Resolved::Status(StatusCode::UNAUTHORIZED);
    };
    let viewer = match state.catalog.profile_by_id(&viewer_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return Resolved::Status(StatusCode::UNAUTHORIZED),
        Err(_) => return Resolved::Status(StatusCode::INTERNAL_SERVER_ERROR),
    };
    let Some(range) = DateRange::month(params.year, params.month) else {
        return Resolved::Status(StatusCode::UNPROCESSABLE_ENTITY);
    };

    let selection = match (&params.manager_id, viewer.role) {
        (Some(requested), role) if role != Role::Gerente => ManagerSelection {
            selected_manager_id: Some(requested.clone()),
            selector_enabled: true,
        },
        _ => {
            let managers = match state.catalog.managers().await {
                Ok(managers) => managers,
                Err(_) => return Resolved::Status(StatusCode::INTERNAL_SERVER_ERROR),
            };
            resolve_manager_selection(&viewer, &managers)
        }
    };

    let Some(manager_id) = selection.selected_manager_id.clone() else {
        return Resolved::Report(ManagerReportResponse {
            selection,
            report: None,
        });
    };

    let projects = match state.reports.projects_by_manager(&manager_id).await {
        Ok(projects) => projects,
        Err(_) => return Resolved::Status(StatusCode::INTERNAL_SERVER_ERROR),
    };
    let rows = match state.reports.manager_rows(&manager_id, range).await {
        Ok(rows) => rows,
        Err(_) => return Resolved::Status(StatusCode::INTERNAL_SERVER_ERROR),
    };
    Resolved::Report(ManagerReportResponse {
        selection,
        report: Some(build_manager_report(
            &manager_id,
            params.year,
            params.month,
            projects,
            rows,
        )),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ManagerReportParams>,
) -> impl IntoResponse {
    match resolve(&state, &headers, &params).await {
        Resolved::Report(response) => Json(response).into_response(),
        Resolved::Status(status) => status.into_response(),
    }
}

pub async fn handle_export(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ManagerReportParams>,
) -> impl IntoResponse {
    let report = match resolve(&state, &headers, &params).await {
        Resolved::Report(response) => response.report,
        Resolved::Status(status) => return status.into_response(),
    };
    let Some(report) = report else {
        return StatusCode::NO_CONTENT.into_response();
    };
    if report.projects.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    let document = export_manager_report(&report);
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", manager_report_filename(&report)),
            ),
        ],
        document.render(),
    )
        .into_response()
}
