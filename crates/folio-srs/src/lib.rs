//! SRS (Spaced Repetition System) library for Folio
//!
//! This crate provides the core spaced repetition scheduling for flashcard
//! reviews: the state transition applied when a card is rated, the query that
//! decides which cards are due, derived study statistics, and the session
//! object that drives a review loop.
//!
//! Everything here is pure: the caller supplies "today" and the engine never
//! touches a clock, so every function is deterministic and unit-testable.

pub mod due;
pub mod policy;
pub mod session;
pub mod state;
pub mod stats;

pub use due::{Reviewable, select_due};
pub use policy::{ReviewPolicy, review};
pub use session::{ReviewSession, SessionSummary};
pub use state::{Rating, ReviewState};
pub use stats::{StudyStats, study_stats};
