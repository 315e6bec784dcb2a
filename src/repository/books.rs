//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books that are active in the catalog. Retired books stay
    /// in the table but are excluded here.
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE is_active = TRUE ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Look up a book by id, active or retired.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Insert a new book and return its id, or `None` on failure.
    /// The cover image, if any, is attached afterwards via
    /// [`set_cover_image`](Self::set_cover_image).
    pub async fn create(&self, book: &BookPayload) -> Option<i32> {
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author, publisher, publication_year, isbn,
                               total_copies, available_copies, acquisition_value, loan_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(&book.isbn)
        .bind(book.total_copies)
        .bind(book.available_copies)
        .bind(book.acquisition_value)
        .bind(&book.loan_status)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::error!("failed to insert book: {err}");
                None
            }
        }
    }

    /// Attach a cover-image filename to an already-inserted book. Not
    /// transactional with the insert: a crash between the two writes
    /// leaves the book without its cover reference.
    pub async fn set_cover_image(&self, filename: &str, id: i32) -> bool {
        let result = sqlx::query("UPDATE books SET cover_image = $1 WHERE id = $2")
            .bind(filename)
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(book_id = id, "failed to set cover image: {err}");
                false
            }
        }
    }

    /// Replace the descriptive fields of a book by id. The availability
    /// flag and cover image are managed by the remove/create flows and
    /// are never touched here.
    pub async fn update(&self, id: i32, book: &BookPayload) -> bool {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author = $2, publisher = $3, publication_year = $4,
                isbn = $5, total_copies = $6, available_copies = $7,
                acquisition_value = $8, loan_status = $9
            WHERE id = $10
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(&book.isbn)
        .bind(book.total_copies)
        .bind(book.available_copies)
        .bind(book.acquisition_value)
        .bind(&book.loan_status)
        .bind(id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(book_id = id, "failed to update book: {err}");
                false
            }
        }
    }

    /// Soft-delete a book: cancel every loan that references it, then
    /// clear its availability flag. Both writes are best-effort with no
    /// all-or-nothing rollback; the book row is retained.
    pub async fn remove(&self, id: i32) -> bool {
        let cancelled = sqlx::query("UPDATE loans SET is_active = FALSE WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        if let Err(err) = cancelled {
            tracing::error!(book_id = id, "failed to cancel loans for book: {err}");
        }

        let result = sqlx::query("UPDATE books SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(book_id = id, "failed to retire book: {err}");
                false
            }
        }
    }
}
