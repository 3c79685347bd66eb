//! The scheduling algorithm: a simplified SM-2 state transition.
//!
//! [`ReviewPolicy::review`] maps (current state, rating, today) to the next
//! state. It is a total function: every rating produces a valid successor
//! state, the ease factor never drops below the floor, and the interval is
//! at least one day after any review.

use chrono::{Days, NaiveDate};

use crate::state::{Rating, ReviewState};

/// Policy knobs for the scheduler.
///
/// The defaults are the intervals the review UI advertises ("~1 day" for
/// hard, "~3 days" for good, "~7 days" for easy on young cards). They are
/// plain data so a deployment can tune them without touching the algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewPolicy {
    /// Hard floor for the ease factor.
    pub ease_floor: f64,
    /// Subtracted from the ease factor on a lapse.
    pub again_penalty: f64,
    /// Subtracted from the ease factor on a hard recall.
    pub hard_penalty: f64,
    /// Added to the ease factor on an easy recall.
    pub easy_bonus: f64,
    /// Interval after a lapse. 1 day, so the card reappears the next day and
    /// never in the same session.
    pub relearn_interval_days: i32,
    /// Interval after the first successful recall (good).
    pub first_interval_days: i32,
    /// Interval after the second consecutive successful recall (good).
    pub second_interval_days: i32,
    /// First-success interval for easy: a larger seed than good.
    pub easy_first_interval_days: i32,
    /// Second-success interval for easy.
    pub easy_second_interval_days: i32,
    /// Interval growth on hard. Replaces the ease multiplier so hard cards
    /// grow strictly slower than good ones.
    pub hard_multiplier: f64,
    /// Extra interval growth on easy, applied on top of the ease factor.
    pub easy_multiplier: f64,
    /// Ceiling on any computed interval. Keeps geometric growth bounded so a
    /// long run of easy recalls can never push `next_review_date` out of the
    /// representable date range.
    pub max_interval_days: i32,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            ease_floor: 1.3,
            again_penalty: 0.20,
            hard_penalty: 0.15,
            easy_bonus: 0.15,
            relearn_interval_days: 1,
            first_interval_days: 1,
            second_interval_days: 3,
            easy_first_interval_days: 4,
            easy_second_interval_days: 7,
            hard_multiplier: 1.2,
            easy_multiplier: 1.3,
            max_interval_days: 365,
        }
    }
}

impl ReviewPolicy {
    /// Compute the state after a review event.
    ///
    /// Pure and deterministic: the caller supplies `today` (the calendar date
    /// of the review), and the input state is never mutated. The stored ease
    /// factor is re-clamped to the floor on every call, so a corrupt persisted
    /// value self-heals on the next review.
    pub fn review(&self, state: &ReviewState, rating: Rating, today: NaiveDate) -> ReviewState {
        let state = self.normalize(state);
        let ease = clamp_ease(state.ease_factor, self.ease_floor);

        let (ease_factor, interval_days, repetitions) = match rating {
            Rating::Again => (
                clamp_ease(ease - self.again_penalty, self.ease_floor),
                self.relearn_interval_days,
                0,
            ),
            Rating::Hard => {
                let new_ease = clamp_ease(ease - self.hard_penalty, self.ease_floor);
                let interval = grow(state.interval_days, self.hard_multiplier);
                (new_ease, interval, state.repetitions + 1)
            }
            Rating::Good => {
                let reps = state.repetitions + 1;
                let interval = match reps {
                    1 => self.first_interval_days,
                    2 => self.second_interval_days,
                    _ => grow(state.interval_days, ease),
                };
                (ease, interval, reps)
            }
            Rating::Easy => {
                let new_ease = clamp_ease(ease + self.easy_bonus, self.ease_floor);
                let reps = state.repetitions + 1;
                let interval = match reps {
                    1 => self.easy_first_interval_days,
                    2 => self.easy_second_interval_days,
                    _ => grow(state.interval_days, new_ease * self.easy_multiplier),
                };
                (new_ease, interval, reps)
            }
        };

        // A reviewed card always waits at least one day, and geometric growth
        // is bounded so the date math below can never leave the valid range.
        let interval_days = interval_days.clamp(1, self.max_interval_days);

        ReviewState {
            ease_factor,
            interval_days,
            repetitions,
            next_review_date: add_days(today, interval_days),
            last_review_date: Some(today),
        }
    }

    /// Repair a state that violates the data-model invariants before using it.
    ///
    /// A card with `repetitions > 0` but no `last_review_date` is a
    /// persistence inconsistency; it is degraded to a never-reviewed card
    /// rather than crashing the session.
    fn normalize(&self, state: &ReviewState) -> ReviewState {
        if state.last_review_date.is_none() && state.repetitions > 0 {
            tracing::warn!(
                repetitions = state.repetitions,
                interval_days = state.interval_days,
                "card has repetitions but no last review date; treating as never reviewed"
            );
            return ReviewState {
                interval_days: 0,
                repetitions: 0,
                ..*state
            };
        }
        *state
    }
}

/// Review with the default policy.
pub fn review(state: &ReviewState, rating: Rating, today: NaiveDate) -> ReviewState {
    ReviewPolicy::default().review(state, rating, today)
}

fn clamp_ease(ease: f64, floor: f64) -> f64 {
    if ease < floor { floor } else { ease }
}

/// Round (not truncate) the grown interval, with a 1-day minimum so a
/// reviewed card is never due again the same day. The float-to-int cast
/// saturates, so even a corrupt stored interval cannot overflow here.
fn grow(interval_days: i32, multiplier: f64) -> i32 {
    ((interval_days as f64) * multiplier).round().max(1.0) as i32
}

fn add_days(date: NaiveDate, days: i32) -> NaiveDate {
    // interval_days is always in [1, max_interval_days] by construction;
    // saturate anyway rather than panic on a date near the end of the range.
    date.checked_add_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MAX)
}
