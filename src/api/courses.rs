use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, validation::validate_course_id};
use crate::models::Course;

/// GET /api/get_courses
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.course_service.list().await?))
}

/// GET /api/get_course_by_id/{id}
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let id = validate_course_id(&id)?;
    Ok(Json(state.course_service.get(&id).await?))
}

/// GET /api/course_categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.course_service.categories().await?))
}

/// GET /api/get_course_by_category/{category}
pub async fn courses_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.course_service.by_category(&category).await?))
}

/// GET /api/get_course_by_name/{name}
pub async fn courses_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.course_service.by_name(&name).await?))
}
