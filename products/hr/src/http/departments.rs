use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use platform_api::ApiResult;

use super::HrState;
use crate::model::Department;

pub(super) fn routes() -> Router<HrState> {
    Router::new()
        .route("/api/departments", get(list).post(create))
        .route(
            "/api/departments/{id}",
            get(show).put(update).delete(remove),
        )
}

async fn list(State(state): State<HrState>) -> ApiResult<Json<Vec<Department>>> {
    Ok(Json(state.departments.list().await?))
}

/// Missing rows answer `200 null`.
async fn show(
    State(state): State<HrState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Option<Department>>> {
    Ok(Json(state.departments.get(id).await?))
}

async fn create(
    State(state): State<HrState>,
    Json(department): Json<Department>,
) -> ApiResult<Json<Department>> {
    Ok(Json(state.departments.create(department).await?))
}

async fn update(
    State(state): State<HrState>,
    Path(id): Path<i32>,
    Json(details): Json<Department>,
) -> ApiResult<Json<Department>> {
    Ok(Json(state.departments.update(id, details).await?))
}

async fn remove(State(state): State<HrState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    state.departments.delete(id).await?;
    Ok(StatusCode::OK)
}
