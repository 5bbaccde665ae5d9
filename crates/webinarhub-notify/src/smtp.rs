//! SMTP mailer using lettre's async transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use webinarhub_core::config::mail::MailConfig;
use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::traits::{EmailMessage, Mailer};

/// SMTP mailer delivering through a relay server.
#[derive(Clone)]
pub struct SmtpMailer {
    /// Shared async SMTP transport.
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender address, `Name <address>` form.
    from_header: String,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from_header", &self.from_header)
            .finish()
    }
}

impl SmtpMailer {
    /// Create an SMTP mailer from the mail configuration section.
    pub fn from_config(config: &MailConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| AppError::configuration(format!("SMTP relay error: {e}")))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_header: format!("{} <{}>", config.from_name, config.from_email),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let email = Message::builder()
            .from(
                self.from_header
                    .parse()
                    .map_err(|e| AppError::mail(format!("Invalid from address: {e}")))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| AppError::mail(format!("Invalid to address: {e}")))?)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| AppError::mail(format!("Failed to build email: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::with_source(
                webinarhub_core::error::ErrorKind::Mail,
                format!("Failed to send email: {e}"),
                e,
            ))?;

        info!(to = %message.to, subject = %message.subject, "Mail delivered via SMTP");
        Ok(())
    }
}
