//! API handlers for Acervo REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod students;

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Control response body: success messages travel as `mensagem`,
/// mirroring the error body shape.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Root welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Acervo library server"))
}
