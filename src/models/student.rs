//! Student model and request payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Student record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    /// Academic registration code; empty until assigned
    pub registration: String,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Create/update payload. Updates replace every field except the id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentPayload {
    /// Academic registration code; assigned after enrollment, so it
    /// defaults to an empty string on creation
    #[serde(default)]
    pub registration: String,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub email: String,
    pub phone: String,
}
