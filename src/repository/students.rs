//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::student::{Student, StudentPayload},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all students
    pub async fn list_all(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT * FROM students ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    /// Insert a new student. Returns whether a row was inserted.
    pub async fn create(&self, student: &StudentPayload) -> bool {
        let result = sqlx::query(
            r#"
            INSERT INTO students (registration, name, surname, birth_date, address, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&student.registration)
        .bind(&student.name)
        .bind(&student.surname)
        .bind(student.birth_date)
        .bind(&student.address)
        .bind(&student.email)
        .bind(&student.phone)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!("failed to insert student: {err}");
                false
            }
        }
    }

    /// Replace all mutable fields of a student by id. Returns whether
    /// any row was affected.
    pub async fn update(&self, id: i32, student: &StudentPayload) -> bool {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET registration = $1, name = $2, surname = $3, birth_date = $4,
                address = $5, email = $6, phone = $7
            WHERE id = $8
            "#,
        )
        .bind(&student.registration)
        .bind(&student.name)
        .bind(&student.surname)
        .bind(student.birth_date)
        .bind(&student.address)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(student_id = id, "failed to update student: {err}");
                false
            }
        }
    }

    /// Delete a student row outright; student removal keeps no history.
    pub async fn remove(&self, id: i32) -> bool {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => done.rows_affected() > 0,
            Err(err) => {
                tracing::error!(student_id = id, "failed to delete student: {err}");
                false
            }
        }
    }
}
