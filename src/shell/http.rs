use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::directory::use_cases::create_user::inbound::http as create_user_http;
use crate::modules::reporting::use_cases::dashboard::inbound::http as dashboard_http;
use crate::modules::reporting::use_cases::executive_report::inbound::http as executive_http;
use crate::modules::reporting::use_cases::manager_report::inbound::http as manager_http;
use crate::modules::reporting::use_cases::project_report::inbound::http as project_http;
use crate::modules::tracking::use_cases::process_entry::inbound::http as process_http;
use crate::modules::tracking::use_cases::register_entry::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/entries", post(register_http::handle))
        .route("/entries/{id}/process", post(process_http::handle))
        .route("/reports/executive", get(executive_http::handle))
        .route("/reports/executive/export", get(executive_http::handle_export))
        .route("/reports/manager", get(manager_http::handle))
        .route("/reports/manager/export", get(manager_http::handle_export))
        .route("/reports/project", get(project_http::handle))
        .route("/reports/project/export", get(project_http::handle_export))
        .route("/dashboard/consultant", get(dashboard_http::handle_consultant))
        .route("/dashboard/manager", get(dashboard_http::handle_manager))
        .route("/dashboard/director", get(dashboard_http::handle_director))
        .route("/users", post(create_user_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
