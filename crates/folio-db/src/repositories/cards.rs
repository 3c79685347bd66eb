use chrono::NaiveDate;
use folio_srs::ReviewState;
use sqlx::{Executor, PgConnection, Postgres};
use uuid::Uuid;

use crate::StoreError;
use crate::models::{Card, NewCard};

// Column list repeated in every query; keep in sync with the Card model.
const CARD_COLUMNS: &str = r#"
    id, chapter_id, book_id, user_id, front, back, card_type, difficulty, tags,
    is_active, is_approved, ease_factor, interval_days, repetitions,
    next_review_date, last_review_date, review_version, created_at
"#;

/// Fetch every active card a user owns. Due filtering, ordering, and
/// statistics happen in memory via `folio-srs`.
pub async fn list_active_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<Card>, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let cards = sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            SELECT {CARD_COLUMNS}
            FROM cards
            WHERE user_id = $1 AND is_active = TRUE
            ORDER BY created_at ASC
        "#
    ))
    .bind(user_id)
    .fetch_all(executor)
    .await?;
    Ok(cards)
}

pub async fn get<'e, E>(executor: E, card_id: Uuid) -> Result<Card, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            SELECT {CARD_COLUMNS}
            FROM cards
            WHERE id = $1
        "#
    ))
    .bind(card_id)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("card"))
}

/// Insert a batch of freshly generated cards for a chapter.
///
/// Seeds the scheduling state the engine expects on first encounter:
/// ease 2.5, interval 0, no repetitions, due on `created_on`.
pub async fn insert_generated(
    conn: &mut PgConnection,
    chapter_id: Uuid,
    book_id: Uuid,
    user_id: Uuid,
    new_cards: &[NewCard],
    created_on: NaiveDate,
) -> Result<Vec<Card>, StoreError> {
    let mut inserted = Vec::with_capacity(new_cards.len());
    for new_card in new_cards {
        let card: Card = sqlx::query_as(&format!(
            // language=PostgreSQL
            r#"
                INSERT INTO cards (
                    id, chapter_id, book_id, user_id, front, back, card_type,
                    difficulty, tags, ease_factor, interval_days, repetitions,
                    next_review_date
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 2.5, 0, 0, $10)
                RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(chapter_id)
        .bind(book_id)
        .bind(user_id)
        .bind(&new_card.front)
        .bind(&new_card.back)
        .bind(new_card.card_type)
        .bind(new_card.difficulty)
        .bind(&new_card.tags)
        .bind(created_on)
        .fetch_one(&mut *conn)
        .await?;
        inserted.push(card);
    }
    Ok(inserted)
}

pub async fn update_content<'e, E>(
    executor: E,
    card_id: Uuid,
    front: &str,
    back: &str,
    tags: &[String],
) -> Result<Card, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            UPDATE cards
            SET front = $2, back = $3, tags = $4
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
        "#
    ))
    .bind(card_id)
    .bind(front)
    .bind(back)
    .bind(tags)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("card"))
}

/// Accept or reject a generated card into the user's deck.
pub async fn set_approved<'e, E>(
    executor: E,
    card_id: Uuid,
    approved: bool,
) -> Result<Card, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            UPDATE cards
            SET is_approved = $2
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
        "#
    ))
    .bind(card_id)
    .bind(approved)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("card"))
}

/// Suspend (`false`) or restore (`true`) a card.
pub async fn set_active<'e, E>(
    executor: E,
    card_id: Uuid,
    active: bool,
) -> Result<Card, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            UPDATE cards
            SET is_active = $2
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
        "#
    ))
    .bind(card_id)
    .bind(active)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::NotFound("card"))
}

pub async fn delete<'e, E>(executor: E, card_id: Uuid) -> Result<(), StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM cards WHERE id = $1
        "#,
    )
    .bind(card_id)
    .execute(executor)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound("card"));
    }
    Ok(())
}

/// Persist the scheduling state computed for one review event.
///
/// The write is guarded by `review_version`: it only lands if the card's
/// version still matches the snapshot the engine computed from, and it bumps
/// the version, so two racing review events for the same card can never
/// silently overwrite each other. Callers must have loaded the card first;
/// a missing row here means the guard failed (or the card was deleted
/// concurrently), and both cases surface as [`StoreError::StaleReview`].
pub async fn persist_review_state<'e, E>(
    executor: E,
    card_id: Uuid,
    expected_version: i32,
    state: &ReviewState,
) -> Result<Card, StoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(&format!(
        // language=PostgreSQL
        r#"
            UPDATE cards
            SET ease_factor = $3,
                interval_days = $4,
                repetitions = $5,
                next_review_date = $6,
                last_review_date = $7,
                review_version = review_version + 1
            WHERE id = $1 AND review_version = $2
            RETURNING {CARD_COLUMNS}
        "#
    ))
    .bind(card_id)
    .bind(expected_version)
    .bind(state.ease_factor)
    .bind(state.interval_days)
    .bind(state.repetitions)
    .bind(state.next_review_date)
    .bind(state.last_review_date)
    .fetch_optional(executor)
    .await?
    .ok_or(StoreError::StaleReview)
}
