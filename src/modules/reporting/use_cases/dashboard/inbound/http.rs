use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::reporting::use_cases::dashboard::consultant::build_consultant_dashboard;
use crate::modules::reporting::use_cases::dashboard::director::build_director_dashboard;
use crate::modules::reporting::use_cases::dashboard::manager::build_manager_dashboard;
use crate::shared::core::calendar::DateRange;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct MonthParams {
    pub year: i32,
    pub month: u32,
}

fn caller_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn handle_consultant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    let Some(user_id) = caller_id(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let range = DateRange::new(params.start_date, params.end_date);
    match state.reports.user_rows(&user_id, range).await {
        Ok(rows) => Json(build_consultant_dashboard(&rows)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle_manager(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MonthParams>,
) -> impl IntoResponse {
    let Some(manager_id) = caller_id(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let Some(range) = DateRange::month(params.year, params.month) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let projects = match state.reports.projects_by_manager(&manager_id).await {
        Ok(projects) => projects,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    match state.reports.manager_rows(&manager_id, range).await {
        Ok(rows) => Json(build_manager_dashboard(&projects, &rows)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle_director(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    let range = DateRange::new(params.start_date, params.end_date);
    let rows = match state.reports.rows_in_range(range).await {
        Ok(rows) => rows,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let consultants = match state.reports.active_consultant_count().await {
        Ok(count) => count,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    Json(build_director_dashboard(&rows, consultants)).into_response()
}

#[cfg(test)]
mod dashboard_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::tests::fixtures::state::seeded_state;

    use super::{handle_consultant, handle_director, handle_manager};

    fn app(state: crate::shell::state::AppState) -> Router {
        Router::new()
            .route("/dashboard/consultant", get(handle_consultant))
            .route("/dashboard/manager", get(handle_manager))
            .route("/dashboard/director", get(handle_director))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_summarize_the_consultants_own_entries() {
        let (state, _) = seeded_state().await;
        let response = app(state)
            .oneshot(
                Request::get("/dashboard/consultant?start_date=2026-01-01&end_date=2026-01-31")
                    .header("x-user-id", "u-ana")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["registered_hours"], 3.0);
        assert_eq!(json["approved_hours"], 2.0);
    }

    #[tokio::test]
    async fn it_should_require_a_caller_for_the_manager_dashboard() {
        let (state, _) = seeded_state().await;
        let response = app(state)
            .oneshot(
                Request::get("/dashboard/manager?year=2026&month=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_build_the_director_overview() {
        let (state, _) = seeded_state().await;
        let response = app(state)
            .oneshot(
                Request::get("/dashboard/director?start_date=2026-01-01&end_date=2026-01-31")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["total_hours"], 3.0);
        assert_eq!(json["work_front_distribution"][0]["work_front"], "SAP IBP");
    }
}
