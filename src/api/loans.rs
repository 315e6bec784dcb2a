//! Loan management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::loan::{LoanDetails, LoanPayload},
    AppState,
};

use super::MessageResponse;

/// List active loans with student and book snapshots
#[utoipa::path(
    get,
    path = "/lista/emprestimos",
    tag = "loans",
    responses(
        (status = 200, description = "Active loans", body = Vec<LoanDetails>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.repository.loans.list_all().await?;
    Ok(Json(loans))
}

/// Register a new loan. The student and book ids are recorded as given;
/// their existence is not verified.
#[utoipa::path(
    post,
    path = "/novo/emprestimo",
    tag = "loans",
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan registered", body = MessageResponse),
        (status = 400, description = "Registration rejected", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    Json(payload): Json<LoanPayload>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.loans.create(&payload).await {
        Ok(Json(MessageResponse::new("Loan registered successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not register the loan. Contact the system administrator.".to_string(),
        ))
    }
}

/// Update a loan, replacing all fields except the id
#[utoipa::path(
    put,
    path = "/atualiza/emprestimo/{id}",
    tag = "loans",
    params(("id" = i32, Path, description = "Loan ID")),
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan updated", body = MessageResponse),
        (status = 400, description = "No matching loan", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LoanPayload>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.loans.update(id, &payload).await {
        Ok(Json(MessageResponse::new("Loan updated successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not update the loan. Contact the system administrator.".to_string(),
        ))
    }
}

/// Cancel a loan: clears the active-record flag, keeping the row for
/// history. Book availability counters are not adjusted.
#[utoipa::path(
    delete,
    path = "/remove/emprestimo/{id}",
    tag = "loans",
    params(("id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan cancelled", body = MessageResponse),
        (status = 400, description = "No matching loan", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_loan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.loans.remove(id).await {
        Ok(Json(MessageResponse::new("Loan cancelled successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not cancel the loan. Contact the system administrator.".to_string(),
        ))
    }
}
