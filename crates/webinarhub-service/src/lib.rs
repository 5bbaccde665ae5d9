//! # webinarhub-service
//!
//! Business logic service layer for WebinarHub. Each service orchestrates
//! repositories and the mailer to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the port traits.

pub mod booking;

pub use booking::BookingService;
