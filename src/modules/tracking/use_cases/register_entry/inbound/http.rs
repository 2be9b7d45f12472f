use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tracking::use_cases::register_entry::command::RegisterEntry;
use crate::modules::tracking::use_cases::register_entry::handler::RegisterError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterEntryBody {
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    /// `HH:MM`, as submitted by the daily entry form.
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct RegisterEntryResponse {
    pub entry_id: String,
    pub duration_minutes: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let (start_time, end_time) = match (
        NaiveTime::parse_from_str(&body.start_time, "%H:%M"),
        NaiveTime::parse_from_str(&body.end_time, "%H:%M"),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let entry_id = Uuid::now_v7().to_string();
    let command = RegisterEntry {
        entry_id: entry_id.clone(),
        user_id: body.user_id,
        project_id: body.project_id,
        date: body.date,
        start_time,
        end_time,
        description: body.description,
    };

    match state.register_handler.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(RegisterEntryResponse {
                entry_id,
                duration_minutes: entry.duration_minutes,
            }),
        )
            .into_response(),
        Err(RegisterError::InvalidInterval) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(RegisterError::UnknownProject(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(RegisterError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
