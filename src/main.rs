//! Acervo Server - School Library Management System
//!
//! REST API server managing students, books, and book loans.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acervo_server::{api, config::AppConfig, repository::Repository, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("acervo_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Acervo Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool. Connectivity failure here is the
    // only error that prevents the listener from starting.
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state with the pool-owning repository
    let state = AppState {
        config: Arc::new(config),
        repository: Arc::new(Repository::new(pool)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Welcome and health checks
        .route("/", get(api::welcome))
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Students
        .route("/lista/alunos", get(api::students::list_students))
        .route("/novo/aluno", post(api::students::create_student))
        .route("/atualiza/aluno/:id", put(api::students::update_student))
        .route("/remove/aluno/:id", delete(api::students::remove_student))
        // Books
        .route("/lista/livros", get(api::books::list_books))
        .route("/lista/livro/:id", get(api::books::get_book))
        .route("/novo/livro", post(api::books::create_book))
        .route("/atualiza/livro/:id", put(api::books::update_book))
        .route("/remove/livro/:id", delete(api::books::remove_book))
        // Loans
        .route("/lista/emprestimos", get(api::loans::list_loans))
        .route("/novo/emprestimo", post(api::loans::create_loan))
        .route("/atualiza/emprestimo/:id", put(api::loans::update_loan))
        .route("/remove/emprestimo/:id", delete(api::loans::remove_loan))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
