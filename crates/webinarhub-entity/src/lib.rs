//! # webinarhub-entity
//!
//! Domain entity models for WebinarHub. Every struct in this crate
//! represents a stored record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod participation;
pub mod user;
pub mod webinar;

pub use participation::Participation;
pub use user::User;
pub use webinar::Webinar;
