use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tracking::use_cases::process_entry::command::{ProcessAction, ProcessEntry};
use crate::modules::tracking::use_cases::process_entry::handler::ProcessError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProcessEntryBody {
    pub action: ProcessAction,
    pub reason: Option<String>,
}

fn caller_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn handle(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<ProcessEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(processed_by) = caller_id(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ProcessEntry {
        entry_id,
        processed_by,
        action: body.action,
        reason: body.reason,
    };

    match state.process_handler.handle(command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(ProcessError::Forbidden) => StatusCode::FORBIDDEN.into_response(),
        Err(ProcessError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ProcessError::NotPending) => StatusCode::CONFLICT.into_response(),
        Err(ProcessError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
