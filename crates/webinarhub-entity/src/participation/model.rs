//! Participation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use webinarhub_core::types::{UserId, WebinarId};

/// One user's registration for one webinar.
///
/// Immutable once created. Uniqueness of the `(user_id, webinar_id)`
/// pair is enforced by the participation store at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    /// The registered user.
    pub user_id: UserId,
    /// The webinar the user registered for.
    pub webinar_id: WebinarId,
    /// When the registration was recorded.
    pub registered_at: DateTime<Utc>,
}

impl Participation {
    /// Create a new participation record stamped with the current time.
    pub fn new(user_id: UserId, webinar_id: WebinarId) -> Self {
        Self {
            user_id,
            webinar_id,
            registered_at: Utc::now(),
        }
    }
}
