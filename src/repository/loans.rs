//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::loan::{BookSnapshot, LoanDetails, LoanPayload, StudentSnapshot},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active loans, each joined with a snapshot of the referenced
    /// student and book for display. Cancelled loans stay in the table
    /// but are excluded; loans whose references dangle (no matching
    /// student or book row) drop out of the join.
    pub async fn list_all(&self) -> AppResult<Vec<LoanDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.student_id, l.book_id, l.loan_date, l.due_date, l.status,
                   s.registration, s.name, s.surname, s.phone,
                   b.title, b.author, b.publisher
            FROM loans l
            JOIN students s ON l.student_id = s.id
            JOIN books b ON l.book_id = b.id
            WHERE l.is_active = TRUE
            ORDER BY l.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            let loan_date: NaiveDate = row.get("loan_date");
            let due_date: NaiveDate = row.get("due_date");

            result.push(LoanDetails {
                id: row.get("id"),
                student_id: row.get("student_id"),
                book_id: row.get("book_id"),
                loan_date,
                due_date,
                status: row.get("status"),
                student: StudentSnapshot {
                    registration: row.get("registration"),
                    name: row.get("name"),
                    surname: row.get("surname"),
                    phone: row.get("phone"),
                },
                book: BookSnapshot {
                    title: row.get("title"),
                    author: row.get("author"),
                    publisher: row.get("publisher"),
                },
            });
        }

        Ok(result)
    }

    /// Insert a new loan. The referenced student and book ids are not
    /// checked for existence. Returns whether a row was inserted.
    pub async fn create(&self, loan: &LoanPayload) -> bool {
        let result = sqlx::query(
            r#"
            INSERT INTO loans (student_id, book_id, loan_date, due_date, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(loan.student_id)
        .bind(loan.book_id)
        .bind(loan.loan_date)
        .bind(loan.due_date)
        .bind(&loan.status)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!("failed to insert loan: {err}");
                false
            }
        }
    }

    /// Replace all fields of a loan by id. Returns whether any row was
    /// affected.
    pub async fn update(&self, id: i32, loan: &LoanPayload) -> bool {
        let result = sqlx::query(
            r#"
            UPDATE loans
            SET student_id = $1, book_id = $2, loan_date = $3, due_date = $4, status = $5
            WHERE id = $6
            "#,
        )
        .bind(loan.student_id)
        .bind(loan.book_id)
        .bind(loan.loan_date)
        .bind(loan.due_date)
        .bind(&loan.status)
        .bind(id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(loan_id = id, "failed to update loan: {err}");
                false
            }
        }
    }

    /// Soft-delete a loan: clear its active-record flag so history
    /// survives for listing joins. Book availability counters are left
    /// untouched.
    pub async fn remove(&self, id: i32) -> bool {
        let result = sqlx::query("UPDATE loans SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(loan_id = id, "failed to cancel loan: {err}");
                false
            }
        }
    }
}
