//! Mailer trait for pluggable notification delivery backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// A single outbound email message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Trait for notification mail delivery.
///
/// The [`Mailer`] trait is defined here in `webinarhub-core` and
/// implemented in `webinarhub-notify`. Implementations exist for SMTP
/// delivery and an in-process recording backend. A send failure is
/// returned to the caller as-is; no retries happen at this layer.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Deliver a single message.
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
