//! In-memory participation store using a Tokio read-write lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use webinarhub_core::error::AppError;
use webinarhub_core::result::AppResult;
use webinarhub_core::types::{UserId, WebinarId};
use webinarhub_entity::Participation;

use crate::participation::ParticipationRepository;

/// In-memory participation repository.
///
/// `save` checks the `(user, webinar)` pair and inserts under one write
/// lock, so duplicate registrations cannot slip in between the check and
/// the insert.
#[derive(Debug, Clone, Default)]
pub struct MemoryParticipationRepository {
    /// All participation records, in insertion order.
    participations: Arc<RwLock<Vec<Participation>>>,
}

impl MemoryParticipationRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipationRepository for MemoryParticipationRepository {
    async fn find_by_webinar(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>> {
        let participations = self.participations.read().await;
        Ok(participations
            .iter()
            .filter(|p| p.webinar_id == *webinar_id)
            .cloned()
            .collect())
    }

    async fn exists(&self, webinar_id: &WebinarId, user_id: &UserId) -> AppResult<bool> {
        let participations = self.participations.read().await;
        Ok(participations
            .iter()
            .any(|p| p.webinar_id == *webinar_id && p.user_id == *user_id))
    }

    async fn save(&self, participation: &Participation) -> AppResult<()> {
        let mut participations = self.participations.write().await;

        let duplicate = participations
            .iter()
            .any(|p| p.webinar_id == participation.webinar_id && p.user_id == participation.user_id);
        if duplicate {
            return Err(AppError::conflict(format!(
                "User {} is already registered for webinar {}",
                participation.user_id, participation.webinar_id
            )));
        }

        participations.push(participation.clone());
        info!(
            user_id = %participation.user_id,
            webinar_id = %participation.webinar_id,
            "Participation recorded"
        );
        Ok(())
    }

    async fn delete(&self, webinar_id: &WebinarId, user_id: &UserId) -> AppResult<bool> {
        let mut participations = self.participations.write().await;
        let before = participations.len();
        participations.retain(|p| !(p.webinar_id == *webinar_id && p.user_id == *user_id));
        Ok(participations.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webinarhub_core::error::ErrorKind;

    #[tokio::test]
    async fn test_save_and_find_by_webinar() {
        let repo = MemoryParticipationRepository::new();
        let webinar_id = WebinarId::new();
        let other_webinar = WebinarId::new();

        repo.save(&Participation::new(UserId::new(), webinar_id))
            .await
            .unwrap();
        repo.save(&Participation::new(UserId::new(), webinar_id))
            .await
            .unwrap();
        repo.save(&Participation::new(UserId::new(), other_webinar))
            .await
            .unwrap();

        let found = repo.find_by_webinar(&webinar_id).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_save_duplicate_pair_conflicts() {
        let repo = MemoryParticipationRepository::new();
        let participation = Participation::new(UserId::new(), WebinarId::new());

        repo.save(&participation).await.unwrap();
        let err = repo.save(&participation).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert!(err.message.contains(&participation.user_id.to_string()));

        let found = repo.find_by_webinar(&participation.webinar_id).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_same_user_may_join_other_webinars() {
        let repo = MemoryParticipationRepository::new();
        let user_id = UserId::new();

        repo.save(&Participation::new(user_id, WebinarId::new()))
            .await
            .unwrap();
        repo.save(&Participation::new(user_id, WebinarId::new()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = MemoryParticipationRepository::new();
        let participation = Participation::new(UserId::new(), WebinarId::new());
        repo.save(&participation).await.unwrap();

        assert!(repo
            .exists(&participation.webinar_id, &participation.user_id)
            .await
            .unwrap());
        assert!(!repo
            .exists(&participation.webinar_id, &UserId::new())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_pair() {
        let repo = MemoryParticipationRepository::new();
        let participation = Participation::new(UserId::new(), WebinarId::new());
        repo.save(&participation).await.unwrap();

        let removed = repo
            .delete(&participation.webinar_id, &participation.user_id)
            .await
            .unwrap();
        assert!(removed);
        assert!(!repo
            .exists(&participation.webinar_id, &participation.user_id)
            .await
            .unwrap());

        let removed_again = repo
            .delete(&participation.webinar_id, &participation.user_id)
            .await
            .unwrap();
        assert!(!removed_again);
    }
}
