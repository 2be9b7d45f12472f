use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::directory::use_cases::create_user::command::CreateUser;
use crate::modules::directory::use_cases::create_user::handler::CreateUserError;
use crate::modules::tracking::core::catalog::Role;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateUserBody {
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    pub role: Role,
    pub activo: bool,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn caller_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(requested_by) = caller_id(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateUser {
        requested_by,
        email: body.email,
        password: body.password,
        nombre: body.nombre,
        apellido: body.apellido,
        role: body.role,
        activo: body.activo,
    };

    match state.create_user_handler.handle(command).await {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(CreateUserError::Forbidden) => (
            StatusCode::FORBIDDEN,
            Json(ErrorBody {
                error: "No autorizado para crear usuarios".into(),
            }),
        )
            .into_response(),
        Err(CreateUserError::Rejected { status, error }) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
            Json(ErrorBody { error }),
        )
            .into_response(),
        Err(CreateUserError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod create_user_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::tests::fixtures::state::seeded_state;

    use super::handle;

    fn app(state: crate::shell::state::AppState) -> Router {
        Router::new().route("/users", post(handle)).with_state(state)
    }

    fn request(caller: &str) -> Request<Body> {
        Request::post("/users")
            .header("content-type", "application/json")
            .header("x-user-id", caller)
            .body(Body::from(
                serde_json::json!({
                    "email": "marta.rios@example.com",
                    "password": "secreta",
                    "nombre": "Marta",
                    "apellido": "Ríos",
                    "role": "consultor",
                    "activo": true,
                })
                .to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_create_the_user_for_a_director() {
        let (state, _) = seeded_state().await;
        let response = app(state).oneshot(request("u-dir")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["email"], "marta.rios@example.com");
        assert_eq!(json["role"], "consultor");
    }

    #[tokio::test]
    async fn it_should_return_403_for_a_gerente() {
        let (state, _) = seeded_state().await;
        let response = app(state).oneshot(request("u-g1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_duplicate_email() {
        let (state, _) = seeded_state().await;
        let application = app(state);
        application
            .clone()
            .oneshot(request("u-dir"))
            .await
            .unwrap();
        let response = application.oneshot(request("u-dir")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
