//! Participation domain entities.

pub mod model;

pub use model::Participation;
