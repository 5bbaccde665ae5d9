//! Webinar entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::types::{UserId, WebinarId};

/// Maximum seat capacity a webinar may be created with.
pub const MAX_SEATS: u32 = 1000;

/// Minimum lead time, in days, between scheduling and the start date.
pub const MIN_LEAD_TIME_DAYS: i64 = 3;

/// A scheduled webinar with a finite seat pool.
///
/// The entity is the single authority for seat arithmetic: every
/// decrement goes through [`Webinar::reduce_seats`] so that
/// `remaining_seats` can never fall below zero, and every rollback
/// increment goes through [`Webinar::restore_seat`] so it can never
/// exceed `seats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webinar {
    /// Unique webinar identifier.
    pub id: WebinarId,
    /// The user who organizes this webinar.
    pub organizer_id: UserId,
    /// Webinar title.
    pub title: String,
    /// Scheduled start time.
    pub start_date: DateTime<Utc>,
    /// Scheduled end time.
    pub end_date: DateTime<Utc>,
    /// Total seat capacity. Immutable after creation.
    pub seats: u32,
    /// Seats still available for booking.
    pub remaining_seats: u32,
    /// When the webinar was created.
    pub created_at: DateTime<Utc>,
}

impl Webinar {
    /// Create a new webinar with a full seat pool.
    pub fn new(
        organizer_id: UserId,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: u32,
    ) -> Self {
        Self {
            id: WebinarId::new(),
            organizer_id,
            title: title.into(),
            start_date,
            end_date,
            seats,
            remaining_seats: seats,
            created_at: Utc::now(),
        }
    }

    /// Check whether the webinar starts less than the minimum lead time
    /// from `now`. Used by scheduling workflows.
    pub fn is_too_soon(&self, now: DateTime<Utc>) -> bool {
        self.start_date - now < Duration::days(MIN_LEAD_TIME_DAYS)
    }

    /// Check whether the seat capacity exceeds the platform maximum.
    pub fn has_too_many_seats(&self) -> bool {
        self.seats > MAX_SEATS
    }

    /// Check whether the seat pool is exhausted.
    pub fn has_not_enough_seats(&self) -> bool {
        self.remaining_seats < 1
    }

    /// Check whether the given user organizes this webinar.
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        self.organizer_id == *user_id
    }

    /// Take one seat from the pool.
    ///
    /// Fails with a capacity error when no seats remain, leaving the
    /// counter untouched.
    pub fn reduce_seats(&mut self) -> AppResult<()> {
        if self.has_not_enough_seats() {
            return Err(AppError::capacity("Not enough seats available"));
        }
        self.remaining_seats -= 1;
        Ok(())
    }

    /// Return one seat to the pool, saturating at the total capacity.
    ///
    /// Only used to roll back a reservation whose booking did not
    /// complete.
    pub fn restore_seat(&mut self) {
        if self.remaining_seats < self.seats {
            self.remaining_seats += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webinar_with_seats(seats: u32, remaining: u32) -> Webinar {
        let now = Utc::now();
        let mut webinar = Webinar::new(
            UserId::new(),
            "Rust for Production",
            now + Duration::days(10),
            now + Duration::days(10) + Duration::hours(2),
            seats,
        );
        webinar.remaining_seats = remaining;
        webinar
    }

    #[test]
    fn test_is_too_soon_boundaries() {
        let now = Utc::now();
        let mut webinar = webinar_with_seats(10, 10);

        webinar.start_date = now + Duration::days(2);
        assert!(webinar.is_too_soon(now));

        webinar.start_date = now + Duration::days(4);
        assert!(!webinar.is_too_soon(now));
    }

    #[test]
    fn test_has_too_many_seats() {
        assert!(webinar_with_seats(1001, 1001).has_too_many_seats());
        assert!(!webinar_with_seats(1000, 1000).has_too_many_seats());
    }

    #[test]
    fn test_has_not_enough_seats() {
        assert!(webinar_with_seats(10, 0).has_not_enough_seats());
        assert!(!webinar_with_seats(10, 1).has_not_enough_seats());
    }

    #[test]
    fn test_is_organizer() {
        let webinar = webinar_with_seats(10, 10);
        assert!(webinar.is_organizer(&webinar.organizer_id));
        assert!(!webinar.is_organizer(&UserId::new()));
    }

    #[test]
    fn test_reduce_seats_decrements() {
        let mut webinar = webinar_with_seats(10, 10);
        webinar.reduce_seats().expect("seats available");
        assert_eq!(webinar.remaining_seats, 9);
    }

    #[test]
    fn test_reduce_seats_fails_when_exhausted() {
        let mut webinar = webinar_with_seats(10, 0);
        let err = webinar.reduce_seats().expect_err("pool exhausted");
        assert_eq!(err.kind, webinarhub_core::error::ErrorKind::Capacity);
        assert_eq!(webinar.remaining_seats, 0);
    }

    #[test]
    fn test_restore_seat_saturates_at_capacity() {
        let mut webinar = webinar_with_seats(10, 10);
        webinar.restore_seat();
        assert_eq!(webinar.remaining_seats, 10);

        webinar.remaining_seats = 9;
        webinar.restore_seat();
        assert_eq!(webinar.remaining_seats, 10);
    }
}
