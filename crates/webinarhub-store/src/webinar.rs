//! Webinar repository port.

use async_trait::async_trait;

use webinarhub_core::result::AppResult;
use webinarhub_core::types::WebinarId;
use webinarhub_entity::Webinar;

/// Trait for webinar persistence adapters.
///
/// Implementations must make [`WebinarRepository::reserve_seat`] atomic:
/// the availability check and the decrement happen in one critical
/// section, so concurrent bookings can never drive `remaining_seats`
/// below zero. The in-memory adapter holds a write lock across both; a
/// SQL backend would issue a conditional `UPDATE ... WHERE
/// remaining_seats > 0` instead.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persist a new webinar.
    async fn create(&self, webinar: &Webinar) -> AppResult<()>;

    /// Fetch a webinar by identifier.
    async fn find_by_id(&self, id: &WebinarId) -> AppResult<Option<Webinar>>;

    /// Atomically take one seat from the webinar's pool.
    ///
    /// Returns the updated record. Fails with `NotFound` when the
    /// webinar does not exist and with `Capacity` when the pool is
    /// exhausted, leaving the stored state untouched in both cases.
    async fn reserve_seat(&self, id: &WebinarId) -> AppResult<Webinar>;

    /// Return a previously reserved seat to the pool.
    ///
    /// Rollback path for bookings that failed after reservation. The
    /// counter saturates at the webinar's total capacity.
    async fn release_seat(&self, id: &WebinarId) -> AppResult<()>;
}
