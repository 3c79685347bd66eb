use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use folio_db::models::Chapter;
use folio_db::repositories::chapters;

use crate::{ApiState, error::ApiError};

/// Create the chapter routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/books/{book_id}/chapters",
            get(list_chapters).post(create_chapter),
        )
        .route(
            "/chapters/{chapter_id}",
            put(update_chapter_progress).delete(delete_chapter),
        )
}

#[derive(Deserialize, Validate)]
struct CreateChapter {
    #[validate(length(min = 1, max = 255))]
    title: String,
    #[validate(range(min = 1))]
    chapter_number: i32,
}

#[derive(Deserialize)]
struct ChapterProgress {
    preread_complete: bool,
    reading_complete: bool,
    postread_complete: bool,
}

async fn list_chapters(
    State(state): State<ApiState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Vec<Chapter>>, ApiError> {
    let chapters = chapters::list_for_book(&state.pool, book_id).await?;
    Ok(Json(chapters))
}

async fn create_chapter(
    State(state): State<ApiState>,
    Path(book_id): Path<Uuid>,
    Json(payload): Json<CreateChapter>,
) -> Result<(StatusCode, Json<Chapter>), ApiError> {
    payload.validate()?;
    let chapter = chapters::insert(
        &state.pool,
        book_id,
        &payload.title,
        payload.chapter_number,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

async fn update_chapter_progress(
    State(state): State<ApiState>,
    Path(chapter_id): Path<Uuid>,
    Json(payload): Json<ChapterProgress>,
) -> Result<Json<Chapter>, ApiError> {
    let chapter = chapters::update_progress(
        &state.pool,
        chapter_id,
        payload.preread_complete,
        payload.reading_complete,
        payload.postread_complete,
    )
    .await?;
    Ok(Json(chapter))
}

/// Delete a chapter and, by cascade, every card generated from it.
async fn delete_chapter(
    State(state): State<ApiState>,
    Path(chapter_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    chapters::delete(&state.pool, chapter_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
