use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::StoreError;
use crate::models::Chapter;

pub async fn list_for_book<'e, E>(executor: E, book_id: Uuid) -> Result<Vec<Chapter>, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let chapters = sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, book_id, title, chapter_number,
                   preread_complete, reading_complete, postread_complete, created_at
            FROM chapters
            WHERE book_id = $1
            ORDER BY chapter_number ASC
        "#,
    )
    .bind(book_id)
    .fetch_all(executor)
    .await?;
    Ok(chapters)
}

pub async fn get<'e, E>(executor: E, chapter_id: Uuid) -> Result<Chapter, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, book_id, title, chapter_number,
                   preread_complete, reading_complete, postread_complete, created_at
            FROM chapters
            WHERE id = $1
        "#,
    )
    .bind(chapter_id)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("chapter"))
}

pub async fn insert<'e, E>(
    executor: E,
    book_id: Uuid,
    title: &str,
    chapter_number: i32,
) -> Result<Chapter, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let chapter = sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO chapters (id, book_id, title, chapter_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, title, chapter_number,
                      preread_complete, reading_complete, postread_complete, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(book_id)
    .bind(title)
    .bind(chapter_number)
    .fetch_one(executor)
    .await?;
    Ok(chapter)
}

pub async fn update_progress<'e, E>(
    executor: E,
    chapter_id: Uuid,
    preread_complete: bool,
    reading_complete: bool,
    postread_complete: bool,
) -> Result<Chapter, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE chapters
            SET preread_complete = $2,
                reading_complete = $3,
                postread_complete = $4
            WHERE id = $1
            RETURNING id, book_id, title, chapter_number,
                      preread_complete, reading_complete, postread_complete, created_at
        "#,
    )
    .bind(chapter_id)
    .bind(preread_complete)
    .bind(reading_complete)
    .bind(postread_complete)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("chapter"))
}

/// Delete a chapter. Its cards go with it (FK cascade).
pub async fn delete<'e, E>(executor: E, chapter_id: Uuid) -> Result<(), StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM chapters WHERE id = $1
        "#,
    )
    .bind(chapter_id)
    .execute(executor)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("chapter"));
    }
    Ok(())
}
