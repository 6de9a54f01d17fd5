use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, FromRequest, Path, Request},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::{
    domain::Employee,
    service::{Service, ServiceError},
    store::MemoryStore,
};

#[derive(Clone)]
pub struct AppState {
    // One lock around the whole service: handlers hold it across each call,
    // so the raise-salary read-modify-write cannot interleave.
    pub service: Arc<Mutex<Service<MemoryStore>>>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        Self::bad_request(value.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The prefix is fixed wire format, applied to every failure category.
        let body = ErrorResponse {
            error: format!("error on parse data: {}", self.message),
        };
        json_response(self.status, &body)
    }
}

pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S>,
    <axum::Json<T> as FromRequest<S>>::Rejection: std::fmt::Display,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(Self(value))
    }
}

const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(CONTENT_TYPE_JSON),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
        Json(body),
    )
        .into_response()
}

// 204 carries the response headers but never a body.
fn no_content() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(CONTENT_TYPE_JSON),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
    )
        .into_response()
}

pub fn build_router(service: Service<MemoryStore>) -> Router {
    let app_state = AppState {
        service: Arc::new(Mutex::new(service)),
    };

    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(healthz))
        .route("/v1/employee", post(create_employee))
        .route("/v1/employee/raise", post(raise_salary))
        .route(
            "/v1/employee/:id",
            get(get_employee).delete(delete_employee),
        )
        .layer(Extension(app_state))
}

async fn healthz() -> Response {
    json_response(StatusCode::OK, &json!({ "status": "ok" }))
}

async fn create_employee(
    Extension(state): Extension<AppState>,
    ApiJson(employee): ApiJson<Employee>,
) -> Result<Response, ApiError> {
    // Checked again in the service; rejecting here keeps bad records from
    // crossing the layer boundary at all.
    employee
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let created = {
        let mut service = state.service.lock().await;
        service.create_employee(employee)?
    };
    Ok(json_response(StatusCode::OK, &created))
}

async fn get_employee(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let employee = {
        let service = state.service.lock().await;
        service.get_employee(id)?
    };
    Ok(json_response(StatusCode::OK, &employee))
}

#[derive(Deserialize)]
struct RaiseRequest {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    amount: i64,
}

async fn raise_salary(
    Extension(state): Extension<AppState>,
    ApiJson(req): ApiJson<RaiseRequest>,
) -> Result<Response, ApiError> {
    {
        let mut service = state.service.lock().await;
        service.raise_salary(req.id, req.amount)?;
    }
    Ok(no_content())
}

async fn delete_employee(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    {
        let mut service = state.service.lock().await;
        service.delete_employee(id)?;
    }
    Ok(no_content())
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::bad_request(format!("couldn't parse id not int: {e}")))
}
