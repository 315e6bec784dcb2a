//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create/update payload. Updates replace every field except the id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoanPayload {
    pub student_id: i32,
    pub book_id: i32,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Free-text status label (e.g. "active", "returned")
    pub status: String,
}

/// Denormalized student fields carried on a loan listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentSnapshot {
    pub registration: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Denormalized book fields carried on a loan listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookSnapshot {
    pub title: String,
    pub author: String,
    pub publisher: String,
}

/// Active loan joined with its student and book, for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub student: StudentSnapshot,
    pub book: BookSnapshot,
}
