//! A review session over a fixed batch of due cards.
//!
//! The batch is fetched once at session start and never re-queried, so a card
//! rated `again` mid-session does not reappear until the next fetch. The
//! session is the only owner of its cursor and tallies; it replaces the
//! ambient "current due cards" state the UI used to share.

use crate::state::Rating;

/// Sequential cursor over one due-card batch, with per-session tallies.
#[derive(Debug, Clone)]
pub struct ReviewSession<T> {
    batch: Vec<T>,
    position: usize,
    reviewed: u32,
    correct: u32,
}

/// What happened during a finished (or in-flight) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Cards rated so far.
    pub reviewed: u32,
    /// Cards rated anything other than `again`.
    pub correct: u32,
}

impl<T> ReviewSession<T> {
    /// Start a session over a batch obtained from [`crate::select_due`].
    pub fn new(batch: Vec<T>) -> Self {
        Self {
            batch,
            position: 0,
            reviewed: 0,
            correct: 0,
        }
    }

    /// The card currently being reviewed, or `None` once the batch is done.
    pub fn current(&self) -> Option<&T> {
        self.batch.get(self.position)
    }

    /// Record the rating for the current card and advance the cursor.
    ///
    /// Callers must persist the engine's result before calling this: a card
    /// only counts as reviewed once its new state is durably stored.
    /// Returns the rated card, or `None` if the session was already complete.
    pub fn complete(&mut self, rating: Rating) -> Option<&T> {
        let card = self.batch.get(self.position)?;
        self.position += 1;
        self.reviewed += 1;
        if rating.is_correct() {
            self.correct += 1;
        }
        Some(card)
    }

    /// Whether every card in the batch has been rated.
    pub fn is_complete(&self) -> bool {
        self.position >= self.batch.len()
    }

    /// Cards left in the batch, including the current one.
    pub fn remaining(&self) -> usize {
        self.batch.len() - self.position
    }

    /// Size of the batch the session started with.
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    /// Whether the session started with an empty batch.
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Tallies so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            reviewed: self.reviewed,
            correct: self.correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_batch_once_in_order() {
        let mut session = ReviewSession::new(vec!["a", "b", "c"]);
        assert_eq!(session.len(), 3);
        assert_eq!(session.current(), Some(&"a"));

        assert_eq!(session.complete(Rating::Good), Some(&"a"));
        assert_eq!(session.current(), Some(&"b"));
        assert_eq!(session.remaining(), 2);

        // "again" advances too: the card must not reappear this session
        assert_eq!(session.complete(Rating::Again), Some(&"b"));
        assert_eq!(session.complete(Rating::Easy), Some(&"c"));

        assert!(session.is_complete());
        assert_eq!(session.current(), None);
        assert_eq!(session.complete(Rating::Good), None);
    }

    #[test]
    fn tallies_reviewed_and_correct() {
        let mut session = ReviewSession::new(vec![1, 2, 3, 4]);
        session.complete(Rating::Good);
        session.complete(Rating::Again);
        session.complete(Rating::Hard);

        let summary = session.summary();
        assert_eq!(summary.reviewed, 3);
        assert_eq!(summary.correct, 2);
        assert!(!session.is_complete());
    }

    #[test]
    fn empty_batch_is_immediately_complete() {
        let session = ReviewSession::<u32>::new(Vec::new());
        assert!(session.is_empty());
        assert!(session.is_complete());
        assert_eq!(session.summary(), SessionSummary { reviewed: 0, correct: 0 });
    }
}
