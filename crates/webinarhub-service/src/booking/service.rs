//! Booking service — admits a user to a webinar's seat pool.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::traits::Mailer;
use webinarhub_core::types::WebinarId;
use webinarhub_entity::{Participation, User};
use webinarhub_store::{ParticipationRepository, UserRepository, WebinarRepository};

use super::email::new_participant_email;

/// Books seats on webinars.
#[derive(Clone)]
pub struct BookingService {
    /// Webinar persistence.
    webinar_repo: Arc<dyn WebinarRepository>,
    /// Participation persistence.
    participation_repo: Arc<dyn ParticipationRepository>,
    /// User persistence (organizer lookup).
    user_repo: Arc<dyn UserRepository>,
    /// Organizer notification delivery.
    mailer: Arc<dyn Mailer>,
}

impl std::fmt::Debug for BookingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService").finish()
    }
}

impl BookingService {
    /// Creates a new booking service with all required dependencies.
    pub fn new(
        webinar_repo: Arc<dyn WebinarRepository>,
        participation_repo: Arc<dyn ParticipationRepository>,
        user_repo: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            webinar_repo,
            participation_repo,
            user_repo,
            mailer,
        }
    }

    /// Performs the complete booking flow:
    ///
    /// 1. Load the webinar
    /// 2. Fast availability check on the loaded snapshot
    /// 3. Duplicate registration check
    /// 4. Atomic seat reservation
    /// 5. Persist the participation (seat released on failure)
    /// 6. Load the organizer; a missing organizer skips notification
    /// 7. Notify the organizer
    ///
    /// The booking is committed after step 5. A failure in step 7
    /// surfaces to the caller, but the participation and the seat
    /// decrement stand — the booking may have succeeded even when this
    /// call returned an error.
    pub async fn book_seat(&self, webinar_id: WebinarId, user: &User) -> AppResult<()> {
        // Step 1: Load the webinar
        let webinar = self
            .webinar_repo
            .find_by_id(&webinar_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Webinar {webinar_id} not found")))?;

        // Step 2: Reject a full webinar before looking at the requester.
        if webinar.has_not_enough_seats() {
            warn!(webinar_id = %webinar_id, user_id = %user.id, "Booking rejected, pool exhausted");
            return Err(AppError::capacity(format!(
                "No seats remaining for webinar {webinar_id}"
            )));
        }

        // Step 3: Duplicate registration check
        if self.participation_repo.exists(&webinar_id, &user.id).await? {
            warn!(webinar_id = %webinar_id, user_id = %user.id, "Booking rejected, already registered");
            return Err(AppError::conflict(format!(
                "User {} is already registered for the webinar",
                user.id
            )));
        }

        // Step 4: Atomic seat reservation. A concurrent booking may have
        // taken the last seat since the snapshot check; the reservation
        // itself is the authoritative gate.
        let webinar = self.webinar_repo.reserve_seat(&webinar_id).await?;

        // Step 5: Persist the participation.
        // If anything fails from here, we must release the seat.
        let participation = Participation::new(user.id, webinar_id);
        if let Err(e) = self.participation_repo.save(&participation).await {
            error!(
                webinar_id = %webinar_id,
                user_id = %user.id,
                error = %e,
                "Failed to persist participation, releasing seat"
            );
            if let Err(release_err) = self.webinar_repo.release_seat(&webinar_id).await {
                error!(webinar_id = %webinar_id, error = %release_err, "Seat release failed");
            }
            return Err(e);
        }

        info!(
            webinar_id = %webinar_id,
            user_id = %user.id,
            remaining = webinar.remaining_seats,
            "Seat booked"
        );

        // Step 6: Load the organizer. A missing organizer is not an
        // error; the booking stands and notification is skipped.
        let Some(organizer) = self.user_repo.find_by_id(&webinar.organizer_id).await? else {
            debug!(
                webinar_id = %webinar_id,
                organizer_id = %webinar.organizer_id,
                "Organizer not found, skipping notification"
            );
            return Ok(());
        };

        // Step 7: Notify the organizer. Failures propagate as-is.
        self.mailer
            .send(&new_participant_email(
                &organizer.email,
                &user.email,
                &webinar.title,
            ))
            .await?;

        Ok(())
    }
}
