use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use folio_db::models::{Book, BookStatus};
use folio_db::repositories::books;

use crate::{ApiState, error::ApiError};

/// Create the book routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/users/{user_id}/books",
            get(list_books).post(create_book),
        )
        .route(
            "/books/{book_id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

#[derive(Deserialize, Validate)]
struct CreateBook {
    #[validate(length(min = 1, max = 255))]
    title: String,
    #[validate(length(max = 255))]
    author: Option<String>,
}

#[derive(Deserialize, Validate)]
struct UpdateBook {
    #[validate(length(min = 1, max = 255))]
    title: String,
    #[validate(length(max = 255))]
    author: Option<String>,
    status: BookStatus,
    #[validate(range(min = 0, max = 100))]
    progress_percent: i32,
}

async fn list_books(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = books::list_for_user(&state.pool, user_id).await?;
    Ok(Json(books))
}

async fn create_book(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<CreateBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    payload.validate()?;
    let book = books::insert(
        &state.pool,
        user_id,
        &payload.title,
        payload.author.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book(
    State(state): State<ApiState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Book>, ApiError> {
    let book = books::get(&state.pool, book_id).await?;
    Ok(Json(book))
}

async fn update_book(
    State(state): State<ApiState>,
    Path(book_id): Path<Uuid>,
    Json(payload): Json<UpdateBook>,
) -> Result<Json<Book>, ApiError> {
    payload.validate()?;
    let book = books::update(
        &state.pool,
        book_id,
        &payload.title,
        payload.author.as_deref(),
        payload.status,
        payload.progress_percent,
    )
    .await?;
    Ok(Json(book))
}

async fn delete_book(
    State(state): State<ApiState>,
    Path(book_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    books::delete(&state.pool, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
