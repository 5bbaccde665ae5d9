//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use webinarhub_core::types::UserId;

/// A registered user in the WebinarHub system.
///
/// Authentication material lives outside this core; a user here is the
/// identity that books seats, organizes webinars, and receives mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated identifier.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            display_name: None,
            created_at: Utc::now(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
