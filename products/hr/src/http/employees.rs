use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use platform_api::ApiResult;
use serde::Deserialize;

use super::HrState;
use crate::model::{Employee, EmployeeProjection};

pub(super) fn routes() -> Router<HrState> {
    Router::new()
        .route("/api/employees", get(list).post(create))
        .route("/api/employees/by-lastname", get(by_last_name))
        .route("/api/employees/{id}", get(show).put(update).delete(remove))
}

#[derive(Debug, Deserialize)]
struct LastNameQuery {
    #[serde(rename = "lastName")]
    last_name: String,
}

async fn list(State(state): State<HrState>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.list().await?))
}

async fn show(
    State(state): State<HrState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Option<Employee>>> {
    Ok(Json(state.employees.get(id).await?))
}

async fn create(
    State(state): State<HrState>,
    Json(employee): Json<Employee>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employees.create(employee).await?))
}

async fn update(
    State(state): State<HrState>,
    Path(id): Path<i64>,
    Json(details): Json<Employee>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employees.update(id, details).await?))
}

async fn remove(State(state): State<HrState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.employees.delete(id).await?;
    Ok(StatusCode::OK)
}

async fn by_last_name(
    State(state): State<HrState>,
    Query(query): Query<LastNameQuery>,
) -> ApiResult<Json<Vec<EmployeeProjection>>> {
    Ok(Json(state.employees.find_by_last_name(&query.last_name).await?))
}
