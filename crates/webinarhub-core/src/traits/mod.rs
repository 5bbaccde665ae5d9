//! Core traits defined in `webinarhub-core` and implemented by other crates.

pub mod mailer;

pub use mailer::{EmailMessage, Mailer};
