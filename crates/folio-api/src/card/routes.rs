use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post, put},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use folio_db::models::{Card, CardDifficulty, CardType, NewCard};
use folio_db::repositories::{books, cards, chapters};

use crate::{ApiState, error::ApiError};

/// Create the card routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/chapters/{chapter_id}/cards", post(create_generated_cards))
        .route("/users/{user_id}/cards", get(list_cards))
        .route("/cards/{card_id}", put(update_card).delete(delete_card))
        .route("/cards/{card_id}/approve", patch(approve_card))
        .route("/cards/{card_id}/suspend", patch(suspend_card))
        .route("/cards/{card_id}/restore", patch(restore_card))
}

#[derive(Serialize, Deserialize, Validate)]
struct GeneratedCard {
    #[validate(length(min = 1, max = 2000))]
    front: String,
    #[validate(length(min = 1, max = 2000))]
    back: String,
    card_type: CardType,
    difficulty: CardDifficulty,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize, Validate)]
struct GeneratedBatch {
    #[validate(nested, length(min = 1, max = 100))]
    cards: Vec<GeneratedCard>,
}

#[derive(Deserialize, Validate)]
struct UpdateCard {
    #[validate(length(min = 1, max = 2000))]
    front: String,
    #[validate(length(min = 1, max = 2000))]
    back: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Store a batch of cards generated from a chapter's post-read extraction.
///
/// Ownership (book, user) is resolved from the chapter; the store seeds each
/// card's scheduling state so it is immediately due once approved.
async fn create_generated_cards(
    State(state): State<ApiState>,
    Path(chapter_id): Path<Uuid>,
    Json(payload): Json<GeneratedBatch>,
) -> Result<(StatusCode, Json<Vec<Card>>), ApiError> {
    payload.validate()?;

    let new_cards: Vec<NewCard> = payload
        .cards
        .into_iter()
        .map(|card| NewCard {
            front: card.front,
            back: card.back,
            card_type: card.card_type,
            difficulty: card.difficulty,
            tags: card.tags,
        })
        .collect();

    let mut tx = state.pool.begin().await.map_err(ApiError::Database)?;

    let chapter = chapters::get(&mut *tx, chapter_id).await?;
    let book = books::get(&mut *tx, chapter.book_id).await?;

    let today = Utc::now().date_naive();
    let inserted = cards::insert_generated(
        &mut *tx,
        chapter.id,
        book.id,
        book.user_id,
        &new_cards,
        today,
    )
    .await?;

    tx.commit().await.map_err(ApiError::Database)?;

    tracing::info!(
        chapter_id = %chapter_id,
        count = inserted.len(),
        "stored generated cards"
    );

    Ok((StatusCode::CREATED, Json(inserted)))
}

async fn list_cards(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = cards::list_active_for_user(&state.pool, user_id).await?;
    Ok(Json(cards))
}

async fn update_card(
    State(state): State<ApiState>,
    Path(card_id): Path<Uuid>,
    Json(payload): Json<UpdateCard>,
) -> Result<Json<Card>, ApiError> {
    payload.validate()?;
    let card = cards::update_content(
        &state.pool,
        card_id,
        &payload.front,
        &payload.back,
        &payload.tags,
    )
    .await?;
    Ok(Json(card))
}

async fn approve_card(
    State(state): State<ApiState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<Card>, ApiError> {
    let card = cards::set_approved(&state.pool, card_id, true).await?;
    Ok(Json(card))
}

async fn suspend_card(
    State(state): State<ApiState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<Card>, ApiError> {
    let card = cards::set_active(&state.pool, card_id, false).await?;
    Ok(Json(card))
}

async fn restore_card(
    State(state): State<ApiState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<Card>, ApiError> {
    let card = cards::set_active(&state.pool, card_id, true).await?;
    Ok(Json(card))
}

async fn delete_card(
    State(state): State<ApiState>,
    Path(card_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    cards::delete(&state.pool, card_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
