//! Webinar domain entities.

pub mod model;

pub use model::Webinar;
