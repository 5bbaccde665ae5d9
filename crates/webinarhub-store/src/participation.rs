//! Participation repository port.

use async_trait::async_trait;

use webinarhub_core::result::AppResult;
use webinarhub_core::types::{UserId, WebinarId};
use webinarhub_entity::Participation;

/// Trait for participation persistence adapters.
///
/// `save` doubles as the uniqueness guard: inserting a `(user, webinar)`
/// pair that already exists fails with `Conflict`, so two concurrent
/// bookings for the same pair cannot both commit.
#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    /// Fetch all participations for a webinar. Order is unspecified.
    async fn find_by_webinar(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>>;

    /// Check whether a user already holds a participation for a webinar.
    async fn exists(&self, webinar_id: &WebinarId, user_id: &UserId) -> AppResult<bool>;

    /// Persist a participation; fails with `Conflict` if the
    /// `(user, webinar)` pair is already present.
    async fn save(&self, participation: &Participation) -> AppResult<()>;

    /// Remove a participation. Returns `true` if a record was removed.
    ///
    /// Rollback path only; participations have no deletion workflow.
    async fn delete(&self, webinar_id: &WebinarId, user_id: &UserId) -> AppResult<bool>;
}
