//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{self, books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acervo API",
        version = "0.1.0",
        description = "School Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        api::welcome,
        health::health_check,
        health::readiness_check,
        // Students
        students::list_students,
        students::create_student,
        students::update_student,
        students::remove_student,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::remove_book,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::update_loan,
        loans::remove_loan,
    ),
    components(
        schemas(
            // Students
            crate::models::student::Student,
            crate::models::student::StudentPayload,
            // Books
            crate::models::book::Book,
            crate::models::book::BookPayload,
            // Loans
            crate::models::loan::LoanPayload,
            crate::models::loan::LoanDetails,
            crate::models::loan::StudentSnapshot,
            crate::models::loan::BookSnapshot,
            // Health
            health::HealthResponse,
            // Control responses
            api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "students", description = "Student management"),
        (name = "books", description = "Book catalog management"),
        (name = "loans", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
