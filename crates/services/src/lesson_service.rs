use std::sync::Arc;

use kotoba_core::model::{Lesson, LessonDraft, LessonId};
use storage::repository::LessonRepository;
use tracing::info;

use crate::error::LessonServiceError;
use crate::Clock;

/// Orchestrates lesson listing and the admin lesson mutations.
#[derive(Clone)]
pub struct LessonService {
    clock: Clock,
    lessons: Arc<dyn LessonRepository>,
}

impl LessonService {
    #[must_use]
    pub fn new(clock: Clock, lessons: Arc<dyn LessonRepository>) -> Self {
        Self { clock, lessons }
    }

    /// List lessons in backend order.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if repository access fails.
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, LessonServiceError> {
        let lessons = self.lessons.list_lessons().await?;
        Ok(lessons)
    }

    /// Fetch a lesson by ID.
    ///
    /// Returns `Ok(None)` when the lesson does not exist.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if repository access fails.
    pub async fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, LessonServiceError> {
        let lesson = self.lessons.get_lesson(id).await?;
        Ok(lesson)
    }

    /// Validate and persist a new lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Lesson` for validation failures.
    /// Returns `LessonServiceError::Storage` if persistence fails.
    pub async fn create_lesson(&self, draft: LessonDraft) -> Result<Lesson, LessonServiceError> {
        let validated = draft.validate(self.clock.now())?;
        let lesson = self.lessons.insert_lesson(validated).await?;
        info!(id = %lesson.id(), number = %lesson.number(), "lesson created");
        Ok(lesson)
    }

    /// Replace the name and number of an existing lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Lesson` for validation failures.
    /// Returns `LessonServiceError::Storage` if the lesson is missing or persistence fails.
    pub async fn update_lesson(
        &self,
        id: &LessonId,
        draft: LessonDraft,
    ) -> Result<Lesson, LessonServiceError> {
        let validated = draft.validate(self.clock.now())?;
        let lesson = self.lessons.update_lesson(id, validated).await?;
        info!(%id, number = %lesson.number(), "lesson updated");
        Ok(lesson)
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the lesson is missing or deletion fails.
    pub async fn delete_lesson(&self, id: &LessonId) -> Result<(), LessonServiceError> {
        self.lessons.delete_lesson(id).await?;
        info!(%id, "lesson deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kotoba_core::model::LessonError;
    use kotoba_core::time::fixed_clock;
    use storage::repository::{InMemoryRepository, StorageError};

    fn service() -> LessonService {
        LessonService::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_returns_lesson() {
        let service = service();
        let lesson = service
            .create_lesson(LessonDraft::new("  Greetings ", 1))
            .await
            .unwrap();

        let fetched = service.get_lesson(lesson.id()).await.unwrap().unwrap();
        assert_eq!(fetched.name(), "Greetings");
        assert_eq!(fetched.number().value(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft_before_storage() {
        let service = service();

        let err = service
            .create_lesson(LessonDraft::new("Greetings", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, LessonServiceError::Lesson(LessonError::InvalidNumber(0))));

        let err = service
            .create_lesson(LessonDraft::new("   ", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, LessonServiceError::Lesson(LessonError::EmptyName)));
        assert!(service.list_lessons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_number_is_a_conflict() {
        let service = service();
        service
            .create_lesson(LessonDraft::new("Greetings", 1))
            .await
            .unwrap();

        let err = service
            .create_lesson(LessonDraft::new("Again", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, LessonServiceError::Storage(StorageError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let service = service();
        let lesson = service
            .create_lesson(LessonDraft::new("Greetings", 1))
            .await
            .unwrap();

        let updated = service
            .update_lesson(lesson.id(), LessonDraft::new("Hello", 4))
            .await
            .unwrap();
        assert_eq!(updated.id(), lesson.id());
        assert_eq!(updated.number().value(), 4);

        service.delete_lesson(lesson.id()).await.unwrap();
        assert!(service.get_lesson(lesson.id()).await.unwrap().is_none());

        let err = service.delete_lesson(lesson.id()).await.unwrap_err();
        assert!(matches!(err, LessonServiceError::Storage(StorageError::NotFound)));
    }
}
