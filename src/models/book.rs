//! Book model and request payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: i32,
    pub isbn: String,
    /// Total number of copies owned by the library
    pub total_copies: i32,
    /// Copies currently on the shelf. Not adjusted by the loan
    /// lifecycle; see DESIGN.md.
    pub available_copies: i32,
    pub acquisition_value: Decimal,
    /// Free-text loan-status label (e.g. "available", "borrowed")
    pub loan_status: String,
    /// Cover image filename, if one was attached
    pub cover_image: Option<String>,
    /// Whether the book is active in the catalog; cleared on removal
    pub is_active: bool,
}

/// Create/update payload. Optional descriptive fields fall back to
/// neutral defaults rather than rejecting the request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub publisher: String,
    #[serde(default)]
    pub publication_year: i32,
    #[serde(default)]
    pub isbn: String,
    pub total_copies: i32,
    pub available_copies: i32,
    #[serde(default)]
    pub acquisition_value: Decimal,
    #[serde(default = "default_loan_status")]
    pub loan_status: String,
    /// Cover image filename; attached in a second write once the
    /// book id is known
    #[serde(default)]
    pub cover_image: Option<String>,
}

fn default_loan_status() -> String {
    "available".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let payload: BookPayload = serde_json::from_value(serde_json::json!({
            "title": "O Cortiço",
            "author": "Aluísio Azevedo",
            "publisher": "Ática",
            "total_copies": 2,
            "available_copies": 2
        }))
        .unwrap();

        assert_eq!(payload.publication_year, 0);
        assert_eq!(payload.isbn, "");
        assert_eq!(payload.acquisition_value, Decimal::ZERO);
        assert_eq!(payload.loan_status, "available");
        assert!(payload.cover_image.is_none());
    }

    #[test]
    fn explicit_fields_are_kept() {
        let payload: BookPayload = serde_json::from_value(serde_json::json!({
            "title": "Dom Casmurro",
            "author": "Machado de Assis",
            "publisher": "Garnier",
            "publication_year": 1899,
            "isbn": "978-85-359-0277-5",
            "total_copies": 3,
            "available_copies": 1,
            "acquisition_value": "49.90",
            "loan_status": "borrowed",
            "cover_image": "dom-casmurro.jpg"
        }))
        .unwrap();

        assert_eq!(payload.publication_year, 1899);
        assert_eq!(payload.acquisition_value.to_string(), "49.90");
        assert_eq!(payload.cover_image.as_deref(), Some("dom-casmurro.jpg"));
    }
}
