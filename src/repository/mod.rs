//! Repository layer for database operations
//!
//! Mutation methods report failure as `false` (or `None`) instead of
//! propagating driver errors: callers treat a failed query and a
//! zero-rows-affected result identically as "no-op, not found, or
//! rejected". Listing methods propagate errors through [`AppResult`].
//!
//! [`AppResult`]: crate::error::AppResult

pub mod books;
pub mod loans;
pub mod students;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub students: students::StudentsRepository,
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            students: students::StudentsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }
}
