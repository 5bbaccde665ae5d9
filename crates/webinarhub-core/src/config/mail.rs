//! Mail delivery configuration.

use serde::{Deserialize, Serialize};

/// Which mailer backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailProviderKind {
    /// In-process mailer that records messages without delivering them.
    Memory,
    /// SMTP delivery via a relay server.
    Smtp,
}

impl Default for MailProviderKind {
    fn default() -> Self {
        Self::Memory
    }
}

impl std::fmt::Display for MailProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailProviderKind::Memory => write!(f, "memory"),
            MailProviderKind::Smtp => write!(f, "smtp"),
        }
    }
}

/// Mail delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Mailer backend selection.
    #[serde(default)]
    pub provider: MailProviderKind,
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP authentication username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP authentication password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender email address.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProviderKind::default(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@webinarhub.local".to_string()
}

fn default_from_name() -> String {
    "WebinarHub".to_string()
}
