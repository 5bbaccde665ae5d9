//! In-process mailer that records messages instead of delivering them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::traits::{EmailMessage, Mailer};

/// Recording mailer for tests and single-node demos.
///
/// Every accepted message is kept in memory and can be inspected via
/// [`MemoryMailer::sent`]. Delivery failures can be simulated with
/// [`MemoryMailer::set_failing`].
#[derive(Debug, Clone, Default)]
pub struct MemoryMailer {
    /// Messages accepted so far, in send order.
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    /// When set, every send fails without recording the message.
    failing: Arc<AtomicBool>,
}

impl MemoryMailer {
    /// Create a mailer that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated delivery failure.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Return a copy of all messages accepted so far.
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::mail(format!(
                "Simulated delivery failure for {}",
                message.to
            )));
        }

        let mut sent = self.sent.lock().await;
        sent.push(message.clone());
        info!(to = %message.to, subject = %message.subject, "Mail recorded");
        Ok(())
    }
}
