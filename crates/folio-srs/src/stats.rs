//! Derived study statistics shown on the home and review screens.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::due::Reviewable;

/// Summary counters derived from a user's card collection. No independent
/// state: recomputed from the cards on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudyStats {
    /// Cards due for review today (no batch limit applied).
    pub due_today: usize,
    /// Active cards whose most recent review happened today. Suspended cards
    /// are excluded here just as they are from every other counter.
    pub reviewed_today: usize,
    /// Active cards in the collection, approved or not.
    pub total_cards: usize,
    /// Consecutive calendar days, ending today, with at least one review.
    pub streak_days: u32,
}

/// Compute [`StudyStats`] over a card collection.
///
/// Only active cards count. The streak walks back from `today` while some
/// card was last reviewed on each day and stops at the first gap, so a day
/// with no reviews yet reports a streak of zero.
pub fn study_stats<T: Reviewable>(cards: &[T], today: NaiveDate) -> StudyStats {
    let active: Vec<&T> = cards.iter().filter(|card| card.is_active()).collect();

    let due_today = active
        .iter()
        .filter(|card| card.in_rotation() && card.next_review_date() <= today)
        .count();

    let review_days: HashSet<NaiveDate> =
        active.iter().filter_map(|card| card.last_review_date()).collect();

    let reviewed_today = active
        .iter()
        .filter(|card| card.last_review_date() == Some(today))
        .count();

    StudyStats {
        due_today,
        reviewed_today,
        total_cards: active.len(),
        streak_days: streak(&review_days, today),
    }
}

fn streak(review_days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut days = 0;
    let mut cursor = today;
    while review_days.contains(&cursor) {
        days += 1;
        cursor = cursor - Days::new(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FakeCard {
        next_review: NaiveDate,
        last_review: Option<NaiveDate>,
        active: bool,
        approved: bool,
    }

    impl Reviewable for FakeCard {
        fn next_review_date(&self) -> NaiveDate {
            self.next_review
        }
        fn last_review_date(&self) -> Option<NaiveDate> {
            self.last_review
        }
        fn created_at(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn is_approved(&self) -> bool {
            self.approved
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn card(due_in: u64, reviewed_ago: Option<u64>) -> FakeCard {
        FakeCard {
            next_review: today() + Days::new(due_in),
            last_review: reviewed_ago.map(|ago| today() - Days::new(ago)),
            active: true,
            approved: true,
        }
    }

    #[test]
    fn counts_due_reviewed_and_total() {
        let cards = vec![
            card(0, Some(1)),
            card(3, Some(0)),
            card(0, None),
            FakeCard {
                active: false,
                ..card(0, Some(0))
            },
        ];
        let stats = study_stats(&cards, today());
        assert_eq!(stats.due_today, 2);
        assert_eq!(stats.reviewed_today, 1);
        assert_eq!(stats.total_cards, 3); // inactive card excluded everywhere
    }

    #[test]
    fn unapproved_cards_count_in_total_but_not_due() {
        let cards = vec![FakeCard {
            approved: false,
            ..card(0, None)
        }];
        let stats = study_stats(&cards, today());
        assert_eq!(stats.due_today, 0);
        assert_eq!(stats.total_cards, 1);
    }

    #[test]
    fn streak_walks_back_until_first_gap() {
        // Reviews today, yesterday, and 2 days ago; gap at 3 days ago.
        let cards = vec![card(5, Some(0)), card(5, Some(1)), card(5, Some(2)), card(5, Some(4))];
        assert_eq!(study_stats(&cards, today()).streak_days, 3);
    }

    #[test]
    fn streak_is_zero_without_a_review_today() {
        let cards = vec![card(5, Some(1)), card(5, Some(2))];
        assert_eq!(study_stats(&cards, today()).streak_days, 0);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let stats = study_stats::<FakeCard>(&[], today());
        assert_eq!(stats.due_today, 0);
        assert_eq!(stats.reviewed_today, 0);
        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.streak_days, 0);
    }
}
