use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::StoreError;
use crate::models::{Book, BookStatus};

/// List a user's books, most recently touched first.
pub async fn list_for_user<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Book>, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let books = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, title, author, status, progress_percent, created_at, updated_at
            FROM books
            WHERE user_id = $1
            ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await?;
    Ok(books)
}

pub async fn get<'e, E>(executor: E, book_id: Uuid) -> Result<Book, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, title, author, status, progress_percent, created_at, updated_at
            FROM books
            WHERE id = $1
        "#,
    )
    .bind(book_id)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("book"))
}

pub async fn insert<'e, E>(
    executor: E,
    user_id: Uuid,
    title: &str,
    author: Option<&str>,
) -> Result<Book, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let book = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO books (id, user_id, title, author, status, progress_percent)
            VALUES ($1, $2, $3, $4, 'reading', 0)
            RETURNING id, user_id, title, author, status, progress_percent, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(author)
    .fetch_one(executor)
    .await?;
    Ok(book)
}

pub async fn update<'e, E>(
    executor: E,
    book_id: Uuid,
    title: &str,
    author: Option<&str>,
    status: BookStatus,
    progress_percent: i32,
) -> Result<Book, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE books
            SET title = $2,
                author = $3,
                status = $4,
                progress_percent = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, title, author, status, progress_percent, created_at, updated_at
        "#,
    )
    .bind(book_id)
    .bind(title)
    .bind(author)
    .bind(status)
    .bind(progress_percent)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("book"))
}

/// Delete a book. Chapters and their cards go with it (FK cascade).
pub async fn delete<'e, E>(executor: E, book_id: Uuid) -> Result<(), StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM books WHERE id = $1
        "#,
    )
    .bind(book_id)
    .execute(executor)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("book"));
    }
    Ok(())
}
