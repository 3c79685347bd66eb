//! Scheduling state attached to each flashcard, and the recall ratings a
//! reviewer can give.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How well the reviewer recalled a card.
///
/// Deserialized from the lowercase wire form (`"again"`, `"hard"`, `"good"`,
/// `"easy"`). An unknown rating is rejected by serde at the API boundary and
/// never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Failed recall (a lapse). Resets the repetition streak.
    Again,
    /// Recalled with difficulty. The interval grows slower than `Good`.
    Hard,
    /// Recalled correctly.
    Good,
    /// Recalled effortlessly. The interval grows faster than `Good`.
    Easy,
}

impl Rating {
    /// Whether this rating counts as a successful recall.
    pub const fn is_correct(self) -> bool {
        !matches!(self, Self::Again)
    }
}

/// The scheduler's working state, embedded in each card.
///
/// Invariants maintained by [`crate::policy::ReviewPolicy::review`]:
/// `ease_factor >= 1.3` at all times; `repetitions == 0` whenever
/// `interval_days == 0`; once a card has been reviewed,
/// `next_review_date == last_review_date + interval_days`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Multiplier applied to the interval on successful recall. Higher means
    /// the card is "easier". Never below the 1.3 floor.
    pub ease_factor: f64,
    /// Days until the next scheduled review. 0 only for a never-reviewed card.
    pub interval_days: i32,
    /// Consecutive successful (non-`again`) reviews since the last lapse.
    pub repetitions: i32,
    /// Date the card becomes due. Day granularity; no time-of-day meaning.
    pub next_review_date: NaiveDate,
    /// Date of the most recent review, `None` until the first review.
    pub last_review_date: Option<NaiveDate>,
}

impl ReviewState {
    /// The state card generation seeds: immediately due, no history.
    pub const fn seed(created_on: NaiveDate) -> Self {
        Self {
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
            next_review_date: created_on,
            last_review_date: None,
        }
    }

    /// Whether this card has ever been reviewed.
    pub const fn is_new(&self) -> bool {
        self.last_review_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn seed_matches_generation_contract() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let state = ReviewState::seed(day);
        assert_eq!(state.ease_factor, 2.5);
        assert_eq!(state.interval_days, 0);
        assert_eq!(state.repetitions, 0);
        assert_eq!(state.next_review_date, day);
        assert_eq!(state.last_review_date, None);
        assert!(state.is_new());
    }

    #[test]
    fn rating_correctness() {
        assert!(!Rating::Again.is_correct());
        assert!(Rating::Hard.is_correct());
        assert!(Rating::Good.is_correct());
        assert!(Rating::Easy.is_correct());
    }

    #[test]
    fn rating_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Rating::Again).unwrap(), "\"again\"");
        let parsed: Rating = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Rating::Easy);
    }

    #[test]
    fn unknown_rating_is_rejected() {
        assert!(serde_json::from_str::<Rating>("\"medium\"").is_err());
    }
}
