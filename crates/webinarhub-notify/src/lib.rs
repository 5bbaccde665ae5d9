//! # webinarhub-notify
//!
//! Mailer adapters for WebinarHub. Implements the [`Mailer`] port from
//! `webinarhub-core` for SMTP delivery (`lettre`) and for an in-process
//! recording backend used by tests and single-node demos.

pub mod memory;
pub mod smtp;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

use async_trait::async_trait;

use webinarhub_core::config::mail::{MailConfig, MailProviderKind};
use webinarhub_core::result::AppResult;
use webinarhub_core::traits::{EmailMessage, Mailer};

/// Dispatcher for mailer backends.
///
/// Switches between the in-process and SMTP mailers based on
/// configuration.
#[derive(Debug, Clone)]
pub enum MailerDispatch {
    /// In-process recording mailer (single node, tests).
    Memory(MemoryMailer),
    /// SMTP relay delivery.
    Smtp(SmtpMailer),
}

impl MailerDispatch {
    /// Create a mailer from the mail configuration section.
    pub fn from_config(config: &MailConfig) -> AppResult<Self> {
        match config.provider {
            MailProviderKind::Memory => Ok(Self::Memory(MemoryMailer::new())),
            MailProviderKind::Smtp => Ok(Self::Smtp(SmtpMailer::from_config(config)?)),
        }
    }
}

#[async_trait]
impl Mailer for MailerDispatch {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        match self {
            Self::Memory(inner) => inner.send(message).await,
            Self::Smtp(inner) => inner.send(message).await,
        }
    }
}
