//! In-memory webinar store using a Tokio read-write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::types::WebinarId;
use webinarhub_entity::Webinar;

use crate::webinar::WebinarRepository;

/// In-memory webinar repository.
///
/// `reserve_seat` takes the write lock for the whole check-then-decrement
/// sequence, which is what makes the reservation atomic across concurrent
/// booking attempts on a single node.
#[derive(Debug, Clone, Default)]
pub struct MemoryWebinarRepository {
    /// Canonical webinar records, keyed by identifier.
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
}

impl MemoryWebinarRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebinarRepository for MemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> AppResult<()> {
        let mut webinars = self.webinars.write().await;
        if webinars.contains_key(&webinar.id) {
            return Err(AppError::conflict(format!(
                "Webinar {} already exists",
                webinar.id
            )));
        }
        webinars.insert(webinar.id, webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> AppResult<Option<Webinar>> {
        let webinars = self.webinars.read().await;
        Ok(webinars.get(id).cloned())
    }

    async fn reserve_seat(&self, id: &WebinarId) -> AppResult<Webinar> {
        let mut webinars = self.webinars.write().await;

        let webinar = webinars
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Webinar {id} not found")))?;

        webinar.reduce_seats()?;
        info!(
            webinar_id = %id,
            remaining = webinar.remaining_seats,
            "Seat reserved"
        );

        Ok(webinar.clone())
    }

    async fn release_seat(&self, id: &WebinarId) -> AppResult<()> {
        let mut webinars = self.webinars.write().await;

        let webinar = webinars
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Webinar {id} not found")))?;

        if webinar.remaining_seats >= webinar.seats {
            warn!(webinar_id = %id, "Attempted to release a seat that was not reserved");
            return Ok(());
        }

        webinar.restore_seat();
        info!(
            webinar_id = %id,
            remaining = webinar.remaining_seats,
            "Seat released"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use webinarhub_core::error::ErrorKind;
    use webinarhub_core::types::UserId;

    fn make_webinar(seats: u32) -> Webinar {
        let now = Utc::now();
        Webinar::new(
            UserId::new(),
            "Async Rust in Practice",
            now + Duration::days(7),
            now + Duration::days(7) + Duration::hours(1),
            seats,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryWebinarRepository::new();
        let webinar = make_webinar(5);
        repo.create(&webinar).await.unwrap();

        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Async Rust in Practice");
        assert_eq!(found.remaining_seats, 5);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_conflicts() {
        let repo = MemoryWebinarRepository::new();
        let webinar = make_webinar(5);
        repo.create(&webinar).await.unwrap();
        let err = repo.create(&webinar).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_find_unknown_returns_none() {
        let repo = MemoryWebinarRepository::new();
        assert!(repo.find_by_id(&WebinarId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reserve_seat_persists_decrement() {
        let repo = MemoryWebinarRepository::new();
        let webinar = make_webinar(2);
        repo.create(&webinar).await.unwrap();

        let updated = repo.reserve_seat(&webinar.id).await.unwrap();
        assert_eq!(updated.remaining_seats, 1);

        // The stored record reflects the decrement without an explicit save.
        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.remaining_seats, 1);
    }

    #[tokio::test]
    async fn test_reserve_seat_exhausted_pool() {
        let repo = MemoryWebinarRepository::new();
        let webinar = make_webinar(1);
        repo.create(&webinar).await.unwrap();

        repo.reserve_seat(&webinar.id).await.unwrap();
        let err = repo.reserve_seat(&webinar.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Capacity);

        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.remaining_seats, 0);
    }

    #[tokio::test]
    async fn test_reserve_seat_unknown_webinar() {
        let repo = MemoryWebinarRepository::new();
        let err = repo.reserve_seat(&WebinarId::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_release_seat_restores_and_saturates() {
        let repo = MemoryWebinarRepository::new();
        let webinar = make_webinar(2);
        repo.create(&webinar).await.unwrap();

        repo.reserve_seat(&webinar.id).await.unwrap();
        repo.release_seat(&webinar.id).await.unwrap();
        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.remaining_seats, 2);

        // Releasing with a full pool is a warned no-op.
        repo.release_seat(&webinar.id).await.unwrap();
        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.remaining_seats, 2);
    }

    #[tokio::test]
    async fn test_concurrent_reserves_never_oversell() {
        let repo = Arc::new(MemoryWebinarRepository::new());
        let webinar = make_webinar(1);
        repo.create(&webinar).await.unwrap();

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            let id = webinar.id;
            tasks.spawn(async move { repo.reserve_seat(&id).await });
        }

        let mut granted = 0;
        while let Some(result) = tasks.join_next().await {
            if result.unwrap().is_ok() {
                granted += 1;
            }
        }

        assert_eq!(granted, 1);
        let found = repo.find_by_id(&webinar.id).await.unwrap().unwrap();
        assert_eq!(found.remaining_seats, 0);
    }
}
