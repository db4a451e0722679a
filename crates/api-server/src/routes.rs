use application::EmployeeApp;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use domain::{DomainError, Employee};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub employee_app: Arc<EmployeeApp>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

/// Maps service failures onto HTTP status codes.
struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::EmailAlreadyExists(_) | DomainError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::RepositoryError(_) => {
                error!("storage failure: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        // Health check
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<Employee>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state
        .employee_app
        .employee_service
        .save_employee(payload)
        .await?;

    info!("✅ Created employee {:?}", employee.id);
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employee_app.employee_service.get_all_employees().await?;
    Ok(Json(employees))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match state.employee_app.employee_service.get_employee_by_id(id).await? {
        Some(employee) => Ok(Json(employee).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> Result<Response, ApiError> {
    let service = &state.employee_app.employee_service;

    let Some(mut employee) = service.get_employee_by_id(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    employee.apply(&payload);
    let updated = service.update_employee(employee).await?;
    Ok(Json(updated).into_response())
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<&'static str>, ApiError> {
    state.employee_app.employee_service.delete_employee(id).await?;
    Ok(Json("Deleted successfully"))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
