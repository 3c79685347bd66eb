//! The review flow: fetch a due batch, rate a card, read study stats.
//!
//! These handlers are the scheduling core's only consumers. "Today" is taken
//! from the server clock here and injected into the engine, which never reads
//! a clock itself.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use folio_db::models::Card;
use folio_db::repositories::cards;
use folio_srs::{Rating, Reviewable, StudyStats, review, select_due, study_stats};

use crate::{ApiState, error::ApiError};

/// Batch size the original client used for a review session.
const DEFAULT_DUE_LIMIT: usize = 50;

/// Create the review routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/users/{user_id}/review/due", get(get_due_cards))
        .route("/users/{user_id}/review/stats", get(get_study_stats))
        .route("/users/{user_id}/review/{card_id}", post(submit_review))
}

#[derive(Deserialize)]
struct DueQuery {
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct ReviewSubmission {
    rating: Rating,
}

/// Fetch the user's due batch: active approved cards whose review date has
/// arrived, most overdue first, capped for a session.
async fn get_due_cards(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<DueQuery>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let today = Utc::now().date_naive();
    let all_cards = cards::list_active_for_user(&state.pool, user_id).await?;
    let due = select_due(
        all_cards,
        today,
        Some(query.limit.unwrap_or(DEFAULT_DUE_LIMIT)),
    );
    Ok(Json(due))
}

async fn get_study_stats(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<StudyStats>, ApiError> {
    let today = Utc::now().date_naive();
    let all_cards = cards::list_active_for_user(&state.pool, user_id).await?;
    Ok(Json(study_stats(&all_cards, today)))
}

/// Apply one review event: read the card, run the scheduling engine, and
/// persist the result atomically.
///
/// The write is version-guarded; if the card was reviewed concurrently
/// elsewhere the handler answers 409 and the client must refetch. The card in
/// the response carries the persisted state, so the client never advances on
/// an unconfirmed write.
async fn submit_review(
    State(state): State<ApiState>,
    Path((user_id, card_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ReviewSubmission>,
) -> Result<Json<Card>, ApiError> {
    let today = Utc::now().date_naive();

    let mut tx = state.pool.begin().await.map_err(ApiError::Database)?;

    let card = cards::get(&mut *tx, card_id).await?;
    if card.user_id != user_id {
        return Err(ApiError::NotFound("card"));
    }
    ensure_in_rotation(&card)?;

    let next_state = review(&card.review_state(), payload.rating, today);
    let updated = cards::persist_review_state(&mut *tx, card.id, card.review_version, &next_state)
        .await?;

    tx.commit().await.map_err(ApiError::Database)?;

    tracing::debug!(
        card_id = %card.id,
        rating = ?payload.rating,
        interval_days = next_state.interval_days,
        next_review = %next_state.next_review_date,
        "review applied"
    );

    Ok(Json(updated))
}

/// Only cards the due selector could have presented may be rated: suspended
/// or unapproved cards are not in rotation and a rating for one is a client
/// bug, not a review event.
fn ensure_in_rotation(card: &Card) -> Result<(), ApiError> {
    if !card.in_rotation() {
        return Err(ApiError::Validation(
            "card is not in review rotation".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_db::models::{CardDifficulty, CardType};

    fn card(is_active: bool, is_approved: bool) -> Card {
        let today = Utc::now().date_naive();
        Card {
            id: Uuid::new_v4(),
            chapter_id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            front: "front".to_string(),
            back: "back".to_string(),
            card_type: CardType::Basic,
            difficulty: CardDifficulty::Medium,
            tags: Vec::new(),
            is_active,
            is_approved,
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
            next_review_date: today,
            last_review_date: None,
            review_version: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn suspended_and_unapproved_cards_cannot_be_rated() {
        assert!(matches!(
            ensure_in_rotation(&card(false, true)),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            ensure_in_rotation(&card(true, false)),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn in_rotation_card_passes_the_gate() {
        assert!(ensure_in_rotation(&card(true, true)).is_ok());
    }
}

