//! Student management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentPayload},
    AppState,
};

use super::MessageResponse;

/// List all students
#[utoipa::path(
    get,
    path = "/lista/alunos",
    tag = "students",
    responses(
        (status = 200, description = "Student list", body = Vec<Student>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.repository.students.list_all().await?;
    Ok(Json(students))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/novo/aluno",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student registered", body = MessageResponse),
        (status = 400, description = "Registration rejected", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.students.create(&payload).await {
        Ok(Json(MessageResponse::new("Student registered successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not register the student. Contact the system administrator.".to_string(),
        ))
    }
}

/// Update a student, replacing all fields except the id
#[utoipa::path(
    put,
    path = "/atualiza/aluno/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "No matching student", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayload>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.students.update(id, &payload).await {
        Ok(Json(MessageResponse::new("Student updated successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not update the student. Contact the system administrator.".to_string(),
        ))
    }
}

/// Remove a student. Unlike books and loans, this deletes the row
/// outright; no history is retained.
#[utoipa::path(
    delete,
    path = "/remove/aluno/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student removed", body = MessageResponse),
        (status = 400, description = "No matching student", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.students.remove(id).await {
        Ok(Json(MessageResponse::new("Student removed successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not remove the student. Contact the system administrator.".to_string(),
        ))
    }
}
