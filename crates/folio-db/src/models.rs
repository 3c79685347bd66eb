use chrono::{DateTime, NaiveDate, Utc};
use folio_srs::{Reviewable, ReviewState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Book model - a book the user is reading
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Unique book identifier
    pub id: Uuid,
    /// Owning user (indexed)
    pub user_id: Uuid,
    /// Book title (max 255 chars)
    pub title: String,
    /// Author, if known
    pub author: Option<String>,
    /// Reading status
    pub status: BookStatus,
    /// Reading progress, 0-100
    pub progress_percent: i32,
    /// When the book was added
    pub created_at: DateTime<Utc>,
    /// When the book was last updated
    pub updated_at: DateTime<Utc>,
}

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "book_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Reading,
    Completed,
    Paused,
}

/// Chapter model - a chapter within a book
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chapter {
    /// Unique chapter identifier
    pub id: Uuid,
    /// Book this chapter belongs to (indexed; deleting the book deletes it)
    pub book_id: Uuid,
    /// Chapter title
    pub title: String,
    /// Position within the book
    pub chapter_number: i32,
    /// Pre-read briefing has been generated
    pub preread_complete: bool,
    /// User has finished reading the chapter
    pub reading_complete: bool,
    /// Post-read extraction has been generated
    pub postread_complete: bool,
    /// When the chapter was created
    pub created_at: DateTime<Utc>,
}

/// Category of a generated flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "card_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Basic,
    Conceptual,
    Application,
    Syntopical,
}

/// Author-assigned difficulty hint. Informational only: the scheduler never
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "card_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CardDifficulty {
    Easy,
    Medium,
    Hard,
}

/// Card model - a flashcard generated from a chapter's post-read extraction,
/// with its embedded scheduling state
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    /// Unique card identifier
    pub id: Uuid,
    /// Chapter this card was generated from (deleting the chapter deletes it)
    pub chapter_id: Uuid,
    /// Book the chapter belongs to (denormalized, indexed)
    pub book_id: Uuid,
    /// Owning user (indexed with next_review_date for the due fetch)
    pub user_id: Uuid,
    /// Prompt text
    pub front: String,
    /// Answer text
    pub back: String,
    /// Card category
    pub card_type: CardType,
    /// Difficulty hint
    pub difficulty: CardDifficulty,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Not suspended or soft-deleted
    pub is_active: bool,
    /// User has accepted the generated card into their deck
    pub is_approved: bool,
    /// Interval multiplier on successful recall (floor 1.3)
    pub ease_factor: f64,
    /// Days until the next scheduled review
    pub interval_days: i32,
    /// Consecutive successful reviews since the last lapse
    pub repetitions: i32,
    /// Date the card becomes due
    pub next_review_date: NaiveDate,
    /// Date of the most recent review (null until first review)
    pub last_review_date: Option<NaiveDate>,
    /// Optimistic-concurrency counter, bumped by every review write
    pub review_version: i32,
    /// When the card was generated
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Snapshot of the scheduling fields, in engine form.
    pub const fn review_state(&self) -> ReviewState {
        ReviewState {
            ease_factor: self.ease_factor,
            interval_days: self.interval_days,
            repetitions: self.repetitions,
            next_review_date: self.next_review_date,
            last_review_date: self.last_review_date,
        }
    }

    /// Write an engine result back onto the card.
    pub fn apply_review_state(&mut self, state: ReviewState) {
        self.ease_factor = state.ease_factor;
        self.interval_days = state.interval_days;
        self.repetitions = state.repetitions;
        self.next_review_date = state.next_review_date;
        self.last_review_date = state.last_review_date;
    }
}

impl Reviewable for Card {
    fn next_review_date(&self) -> NaiveDate {
        self.next_review_date
    }

    fn last_review_date(&self) -> Option<NaiveDate> {
        self.last_review_date
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_approved(&self) -> bool {
        self.is_approved
    }
}

/// Insert shape for a freshly generated card. Content only: the store seeds
/// the scheduling state (ease 2.5, interval 0, immediately due).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCard {
    pub front: String,
    pub back: String,
    pub card_type: CardType,
    pub difficulty: CardDifficulty,
    pub tags: Vec<String>,
}
