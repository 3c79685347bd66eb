//! Due-card selection: which cards should be shown today, in what order.

use chrono::{DateTime, NaiveDate, Utc};

/// Accessors the selector and the stats need from a card.
///
/// Implemented by `folio_db::models::Card`; kept as a trait so the core stays
/// free of storage concerns and tests can use lightweight fixtures.
pub trait Reviewable {
    /// Date the card becomes due.
    fn next_review_date(&self) -> NaiveDate;
    /// Date of the most recent review, if any.
    fn last_review_date(&self) -> Option<NaiveDate>;
    /// Creation timestamp, used as the deterministic tie-breaker.
    fn created_at(&self) -> DateTime<Utc>;
    /// Not suspended or soft-deleted.
    fn is_active(&self) -> bool;
    /// Accepted by the user into their deck.
    fn is_approved(&self) -> bool;

    /// Whether the card participates in review scheduling at all.
    fn in_rotation(&self) -> bool {
        self.is_active() && self.is_approved()
    }
}

/// Select the cards due for review on `today`.
///
/// A card is due iff it is in rotation and `next_review_date <= today`.
/// The result is ordered most-overdue first (ascending `next_review_date`),
/// with ties broken by ascending creation time, so repeated calls over an
/// unchanged card set return the same sequence. `limit` caps the batch for
/// session-sized fetches; `None` returns the full due set.
pub fn select_due<T: Reviewable>(
    cards: Vec<T>,
    today: NaiveDate,
    limit: Option<usize>,
) -> Vec<T> {
    let mut due: Vec<T> = cards
        .into_iter()
        .filter(|card| card.in_rotation() && card.next_review_date() <= today)
        .collect();

    due.sort_by_key(|card| (card.next_review_date(), card.created_at()));

    if let Some(limit) = limit {
        due.truncate(limit);
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeCard {
        id: u32,
        next_review: NaiveDate,
        created_at: DateTime<Utc>,
        active: bool,
        approved: bool,
    }

    impl Reviewable for FakeCard {
        fn next_review_date(&self) -> NaiveDate {
            self.next_review
        }
        fn last_review_date(&self) -> Option<NaiveDate> {
            None
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
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

    fn card(id: u32, due_offset: i64, created_minute: u32) -> FakeCard {
        let next_review = if due_offset < 0 {
            today() - Days::new(due_offset.unsigned_abs())
        } else {
            today() + Days::new(due_offset as u64)
        };
        FakeCard {
            id,
            next_review,
            created_at: Utc
                .with_ymd_and_hms(2025, 6, 1, 12, created_minute, 0)
                .unwrap(),
            active: true,
            approved: true,
        }
    }

    #[test]
    fn due_boundary_is_inclusive() {
        let cards = vec![card(1, 0, 0), card(2, 1, 1)];
        let due = select_due(cards, today(), None);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);
    }

    #[test]
    fn most_overdue_first_with_created_at_tiebreak() {
        // Scenario E: offsets {-2, 0, +1, -1, 0}, limit 2
        let cards = vec![
            card(1, -2, 4),
            card(2, 0, 1),
            card(3, 1, 2),
            card(4, -1, 3),
            card(5, 0, 0),
        ];
        let due = select_due(cards, today(), Some(2));
        assert_eq!(due.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn ties_broken_by_creation_time() {
        let cards = vec![card(2, 0, 1), card(5, 0, 0)];
        let due = select_due(cards, today(), None);
        assert_eq!(due.iter().map(|c| c.id).collect::<Vec<_>>(), vec![5, 2]);
    }

    #[test]
    fn suspended_and_unapproved_cards_are_skipped() {
        let mut suspended = card(1, -3, 0);
        suspended.active = false;
        let mut unapproved = card(2, -3, 1);
        unapproved.approved = false;
        let due = select_due(vec![suspended, unapproved, card(3, -3, 2)], today(), None);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 3);
    }

    #[test]
    fn repeated_selection_is_stable() {
        let cards = vec![
            card(1, -1, 3),
            card(2, -1, 1),
            card(3, 0, 2),
            card(4, -2, 0),
        ];
        let first = select_due(cards.clone(), today(), None);
        let second = select_due(cards, today(), None);
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![4, 2, 1, 3]
        );
    }

    #[test]
    fn limit_zero_and_empty_input() {
        assert!(select_due(Vec::<FakeCard>::new(), today(), None).is_empty());
        assert!(select_due(vec![card(1, -1, 0)], today(), Some(0)).is_empty());
    }
}
