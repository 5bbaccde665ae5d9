//! In-memory storage adapters.
//!
//! Suitable for single-node deployments and tests. Each store owns the
//! canonical records behind a `tokio::sync::RwLock`; mutations happen in
//! place under the write lock, so reads after a successful booking
//! always observe the decremented seat count.

pub mod participation;
pub mod user;
pub mod webinar;

pub use participation::MemoryParticipationRepository;
pub use user::MemoryUserRepository;
pub use webinar::MemoryWebinarRepository;
